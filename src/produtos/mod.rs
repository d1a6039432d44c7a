// src/produtos/mod.rs

pub mod produtos_structs;
pub mod produtos_repository;
pub mod produtos_router;

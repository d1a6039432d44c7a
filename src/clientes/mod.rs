// src/clientes/mod.rs

pub mod clientes_structs;
pub mod clientes_repository;
pub mod clientes_router;

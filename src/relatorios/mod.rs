// src/relatorios/mod.rs

pub mod relatorios_structs;
pub mod relatorios_repository;
pub mod relatorios_router;

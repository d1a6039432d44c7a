// src/configuracoes/mod.rs

pub mod configuracoes_structs;
pub mod configuracoes_repository;
pub mod configuracoes_router;

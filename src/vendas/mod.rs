// src/vendas/mod.rs

pub mod vendas_structs;
pub mod vendas_repository;
// Transação de registro da venda
pub mod vendas_service;
pub mod vendas_router;

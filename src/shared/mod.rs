// src/shared/mod.rs

// Estruturas de resposta comuns a todos os módulos
pub mod shared_structs;
// Erros da API e sua conversão em respostas HTTP
pub mod erros;
// Serialização de valores monetários
pub mod decimal;

// src/shared/shared_structs.rs

use serde::Serialize;

/// Corpo padrão de todas as respostas de erro da API: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErroResponse {
    pub error: String,
}

/// Resposta simples de verificação de saúde do serviço.
#[derive(Serialize)]
pub struct SaudeResponse {
    pub status: &'static str,
}

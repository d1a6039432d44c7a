// src/configuracoes/configuracoes_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Dados da loja impressos no cabeçalho do recibo. Existe uma única linha (id = 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DadosLoja {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub contato: String,
}

// src/categorias/categoria_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Nome da categoria cujos produtos têm controle de estoque.
/// A comparação é exata: "peças" ou "Pecas" não contam.
pub const CATEGORIA_COM_ESTOQUE: &str = "Peças";

/// Informa se uma categoria, pelo nome, controla estoque.
pub fn controla_estoque(nome_categoria: Option<&str>) -> bool {
    nome_categoria == Some(CATEGORIA_COM_ESTOQUE)
}

/// Estrutura para receber dados de uma categoria na requisição POST/PUT
#[derive(Deserialize)]
pub struct NovaCategoria {
    #[serde(default)]
    pub name: String,
}

/// Estrutura que representa uma categoria no banco de dados
#[derive(Debug, Serialize, FromRow)]
pub struct Categoria {
    pub id: i32,
    pub name: String,
}

// src/produtos/produtos_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::categorias::categoria_structs::controla_estoque;
use crate::shared::decimal;
use crate::shared::erros::{exigir_preenchido, ApiError};

/// Estrutura para receber dados do produto na requisição POST/PUT
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoProduto {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub sku: String,
    pub category_id: Option<i32>,
    #[serde(default, with = "decimal")]
    pub preco: BigDecimal,
    #[serde(default)]
    pub estoque: i32,
    #[serde(default)]
    pub estoque_minimo: i32,
    #[serde(default)]
    pub imagem: String,
}

impl NovoProduto {
    pub fn validar(&self) -> Result<(), ApiError> {
        exigir_preenchido(&self.nome, "Nome e SKU são obrigatórios.")?;
        exigir_preenchido(&self.sku, "Nome e SKU são obrigatórios.")?;
        if self.preco < BigDecimal::from(0) {
            return Err(ApiError::Validacao("O preço não pode ser negativo.".to_string()));
        }
        Ok(())
    }

    /// Preço arredondado para centavos, como o banco grava.
    pub fn normalizado(mut self) -> Self {
        self.preco = self.preco.round(2);
        self
    }

    /// Monta o registro completo devolvido após cadastro ou atualização.
    pub fn com_id(self, id: i32) -> Produto {
        Produto {
            id,
            nome: self.nome,
            sku: self.sku,
            category_id: self.category_id,
            preco: self.preco,
            estoque: self.estoque,
            estoque_minimo: self.estoque_minimo,
            imagem: self.imagem,
        }
    }
}

/// Estrutura que representa um produto no banco de dados
/// Deriva FromRow para mapeamento direto de resultados de query SQL
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub sku: String,
    pub category_id: Option<i32>,
    #[serde(with = "decimal")]
    pub preco: BigDecimal,
    pub estoque: i32,
    pub estoque_minimo: i32,
    pub imagem: String,
}

/// Produto com o nome da sua categoria, usado nas regras de estoque.
#[derive(Debug, Clone, FromRow)]
pub struct ProdutoEstoque {
    pub id: i32,
    pub nome: String,
    pub preco: BigDecimal,
    pub estoque: i32,
    pub categoria_nome: Option<String>,
}

impl ProdutoEstoque {
    pub fn controla_estoque(&self) -> bool {
        controla_estoque(self.categoria_nome.as_deref())
    }
}

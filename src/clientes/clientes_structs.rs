// src/clientes/clientes_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::erros::{exigir_preenchido, ApiError};

/// Tipo do documento do cliente: pessoa física (CPF) ou jurídica (CNPJ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TipoDocumento {
    #[default]
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "CNPJ")]
    Cnpj,
}

impl TipoDocumento {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoDocumento::Cpf => "CPF",
            TipoDocumento::Cnpj => "CNPJ",
        }
    }

    fn do_banco(valor: &str) -> Self {
        if valor == "CNPJ" {
            TipoDocumento::Cnpj
        } else {
            TipoDocumento::Cpf
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endereco {
    pub logradouro: String,
    pub bairro: String,
    pub cep: String,
    pub cidade: String,
    pub uf: String,
}

/// Estrutura para receber dados do cliente na requisição POST/PUT.
/// O endereço chega aninhado, como o front end envia.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoCliente {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub tipo_documento: TipoDocumento,
    #[serde(default)]
    pub documento: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub veiculo: String,
    #[serde(default)]
    pub endereco: Endereco,
}

impl NovoCliente {
    pub fn validar(&self) -> Result<(), ApiError> {
        exigir_preenchido(&self.nome, "O nome do cliente é obrigatório.")
    }

    pub fn com_id(self, id: i32) -> Cliente {
        Cliente {
            id,
            nome: self.nome,
            tipo_documento: self.tipo_documento,
            documento: self.documento,
            email: self.email,
            telefone: self.telefone,
            veiculo: self.veiculo,
            endereco: self.endereco,
        }
    }
}

/// Cliente como é devolvido pela API.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub tipo_documento: TipoDocumento,
    pub documento: String,
    pub email: String,
    pub telefone: String,
    pub veiculo: String,
    pub endereco: Endereco,
}

/// Linha da tabela `customers`, com o endereço em colunas.
#[derive(FromRow)]
pub struct ClienteRow {
    pub id: i32,
    pub nome: String,
    pub tipo_documento: String,
    pub documento: String,
    pub email: String,
    pub telefone: String,
    pub veiculo: String,
    pub logradouro: String,
    pub bairro: String,
    pub cep: String,
    pub cidade: String,
    pub uf: String,
}

impl From<ClienteRow> for Cliente {
    fn from(row: ClienteRow) -> Self {
        Cliente {
            id: row.id,
            nome: row.nome,
            tipo_documento: TipoDocumento::do_banco(&row.tipo_documento),
            documento: row.documento,
            email: row.email,
            telefone: row.telefone,
            veiculo: row.veiculo,
            endereco: Endereco {
                logradouro: row.logradouro,
                bairro: row.bairro,
                cep: row.cep,
                cidade: row.cidade,
                uf: row.uf,
            },
        }
    }
}

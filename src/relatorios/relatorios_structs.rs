// src/relatorios/relatorios_structs.rs

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::shared::decimal;

/// Nome exibido para vendas sem cliente cadastrado.
pub const CLIENTE_BALCAO: &str = "Balcão";

/// Quantos produtos e quantas vendas entram nos rankings do resumo.
pub const LIMITE_RANKING: i64 = 5;

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoMaisVendido {
    pub product_id: i32,
    pub nome: String,
    pub quantidade: i64,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VendaRecente {
    pub id: i32,
    pub numero: String,
    pub data_hora: DateTime<Utc>,
    #[serde(with = "decimal")]
    pub total: BigDecimal,
}

/// Indicadores da tela de relatórios.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumoVendas {
    #[serde(with = "decimal")]
    pub receita_total: BigDecimal,
    pub total_vendas: i64,
    #[serde(with = "decimal")]
    pub ticket_medio: BigDecimal,
    pub clientes_cadastrados: i64,
    pub mais_vendidos: Vec<ProdutoMaisVendido>,
    pub ultimas_vendas: Vec<VendaRecente>,
}

/// Linha do histórico financeiro.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LancamentoFinanceiro {
    pub id: i32,
    pub numero: String,
    pub data_hora: DateTime<Utc>,
    pub cliente: String,
    pub pagamento: String,
    #[serde(with = "decimal")]
    pub total: BigDecimal,
}

/// Receita média por venda, em centavos; zero quando ainda não há vendas.
pub fn ticket_medio(receita: &BigDecimal, vendas: i64) -> BigDecimal {
    if vendas <= 0 {
        return BigDecimal::from(0);
    }
    (receita / &BigDecimal::from(vendas)).round(2)
}

// src/relatorios/relatorios_repository.rs

use bigdecimal::BigDecimal;
use sqlx::PgPool;

use super::relatorios_structs::{LancamentoFinanceiro, ProdutoMaisVendido, VendaRecente, CLIENTE_BALCAO, LIMITE_RANKING};

/// Receita somada e quantidade de vendas.
pub async fn receita_e_quantidade(pool: &PgPool) -> Result<(BigDecimal, i64), sqlx::Error> {
    sqlx::query_as::<_, (BigDecimal, i64)>("SELECT COALESCE(SUM(total), 0), COUNT(*) FROM sales")
        .fetch_one(pool)
        .await
}

/// Produtos por quantidade vendida. Produtos já excluídos ficam de fora.
pub async fn mais_vendidos(pool: &PgPool) -> Result<Vec<ProdutoMaisVendido>, sqlx::Error> {
    sqlx::query_as::<_, ProdutoMaisVendido>(
        "SELECT si.product_id, p.nome, SUM(si.qtd)::BIGINT AS quantidade \
         FROM sale_items si JOIN products p ON p.id = si.product_id \
         GROUP BY si.product_id, p.nome \
         ORDER BY quantidade DESC, si.product_id \
         LIMIT $1",
    )
    .bind(LIMITE_RANKING)
    .fetch_all(pool)
    .await
}

/// Vendas mais recentes primeiro.
pub async fn ultimas_vendas(pool: &PgPool) -> Result<Vec<VendaRecente>, sqlx::Error> {
    sqlx::query_as::<_, VendaRecente>(
        "SELECT id, numero, data_hora, total FROM sales ORDER BY id DESC LIMIT $1",
    )
    .bind(LIMITE_RANKING)
    .fetch_all(pool)
    .await
}

pub async fn historico_financeiro(pool: &PgPool) -> Result<Vec<LancamentoFinanceiro>, sqlx::Error> {
    sqlx::query_as::<_, LancamentoFinanceiro>(
        "SELECT s.id, s.numero, s.data_hora, COALESCE(c.nome, $1) AS cliente, s.pagamento, s.total \
         FROM sales s LEFT JOIN customers c ON c.id = s.cliente_id \
         ORDER BY s.id",
    )
    .bind(CLIENTE_BALCAO)
    .fetch_all(pool)
    .await
}

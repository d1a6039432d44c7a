// src/vendas/vendas_repository.rs

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};

use super::vendas_structs::{ItemCarrinho, ItemVenda, Pagamento, Totais, Venda, VendaComItens};

const COLUNAS_VENDA: &str =
    "id, numero, data_hora, subtotal, descontos, acrescimos, total, pagamento, cliente_id, recebido, troco";

pub async fn contar(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sales")
        .fetch_one(conn)
        .await
}

pub async fn inserir_venda(
    conn: &mut PgConnection,
    numero: &str,
    totais: &Totais,
    pagamento: &Pagamento,
    cliente_id: Option<i32>,
) -> Result<Venda, sqlx::Error> {
    sqlx::query_as::<_, Venda>(&format!(
        "INSERT INTO sales (numero, data_hora, subtotal, descontos, acrescimos, total, pagamento, \
         cliente_id, recebido, troco) VALUES ($1, NOW(), $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {}",
        COLUNAS_VENDA
    ))
    .bind(numero)
    .bind(&totais.subtotal)
    .bind(&totais.descontos)
    .bind(&totais.acrescimos)
    .bind(&totais.total)
    .bind(pagamento.forma.trim())
    .bind(cliente_id)
    .bind(&totais.recebido)
    .bind(&totais.troco)
    .fetch_one(conn)
    .await
}

pub async fn inserir_item(conn: &mut PgConnection, sale_id: i32, item: &ItemCarrinho) -> Result<ItemVenda, sqlx::Error> {
    sqlx::query_as::<_, ItemVenda>(
        "INSERT INTO sale_items (sale_id, product_id, nome, preco, qtd) VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, sale_id, product_id, nome, preco, qtd",
    )
    .bind(sale_id)
    .bind(item.product_id)
    .bind(&item.nome)
    .bind(&item.preco)
    .bind(item.qtd)
    .fetch_one(conn)
    .await
}

/// Todas as vendas em ordem de id, cada uma com seus itens na ordem em que foram gravados.
pub async fn listar_com_itens(pool: &PgPool) -> Result<Vec<VendaComItens>, sqlx::Error> {
    let vendas = sqlx::query_as::<_, Venda>(&format!("SELECT {} FROM sales ORDER BY id", COLUNAS_VENDA))
        .fetch_all(pool)
        .await?;
    let itens = sqlx::query_as::<_, ItemVenda>(
        "SELECT id, sale_id, product_id, nome, preco, qtd FROM sale_items ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut por_venda: HashMap<i32, Vec<ItemVenda>> = HashMap::new();
    for item in itens {
        por_venda.entry(item.sale_id).or_default().push(item);
    }

    Ok(vendas
        .into_iter()
        .map(|venda| VendaComItens {
            itens: por_venda.remove(&venda.id).unwrap_or_default(),
            venda,
        })
        .collect())
}

// src/configuracoes/configuracoes_repository.rs

use sqlx::PgPool;

use super::configuracoes_structs::DadosLoja;

/// Id fixo da linha única de `store_info`.
const ID_LOJA: i32 = 1;

pub async fn buscar(pool: &PgPool) -> Result<Option<DadosLoja>, sqlx::Error> {
    sqlx::query_as::<_, DadosLoja>("SELECT nome, doc, endereco, contato FROM store_info WHERE id = $1")
        .bind(ID_LOJA)
        .fetch_optional(pool)
        .await
}

pub async fn atualizar(pool: &PgPool, dados: &DadosLoja) -> Result<u64, sqlx::Error> {
    let resultado = sqlx::query(
        "UPDATE store_info SET nome = $1, doc = $2, endereco = $3, contato = $4 WHERE id = $5",
    )
    .bind(&dados.nome)
    .bind(&dados.doc)
    .bind(&dados.endereco)
    .bind(&dados.contato)
    .bind(ID_LOJA)
    .execute(pool)
    .await?;
    Ok(resultado.rows_affected())
}

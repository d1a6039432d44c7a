// src/categorias/categoria_repository.rs

use sqlx::PgPool;

use super::categoria_structs::Categoria;

pub async fn listar(pool: &PgPool) -> Result<Vec<Categoria>, sqlx::Error> {
    sqlx::query_as::<_, Categoria>("SELECT id, name FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn inserir(pool: &PgPool, nome: &str) -> Result<Categoria, sqlx::Error> {
    sqlx::query_as::<_, Categoria>("INSERT INTO categories (name) VALUES ($1) RETURNING id, name")
        .bind(nome)
        .fetch_one(pool)
        .await
}

/// Atualiza o nome. Um id inexistente não é erro: nenhuma linha é afetada.
pub async fn atualizar(pool: &PgPool, id: i32, nome: &str) -> Result<u64, sqlx::Error> {
    let resultado = sqlx::query("UPDATE categories SET name = $1 WHERE id = $2")
        .bind(nome)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(resultado.rows_affected())
}

pub async fn excluir(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let resultado = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(resultado.rows_affected())
}

/// Quantos produtos usam a categoria.
pub async fn contar_produtos(pool: &PgPool, id: i32) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE category_id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
}

// src/produtos/produtos_repository.rs

use sqlx::{PgConnection, PgPool};

use super::produtos_structs::{NovoProduto, Produto, ProdutoEstoque};
use crate::categorias::categoria_structs::CATEGORIA_COM_ESTOQUE;

const COLUNAS: &str = "id, nome, sku, category_id, preco, estoque, estoque_minimo, imagem";

pub async fn listar(pool: &PgPool) -> Result<Vec<Produto>, sqlx::Error> {
    sqlx::query_as::<_, Produto>(&format!("SELECT {} FROM products ORDER BY id", COLUNAS))
        .fetch_all(pool)
        .await
}

/// Produtos da categoria com estoque que estão no mínimo ou abaixo dele.
pub async fn listar_estoque_baixo(pool: &PgPool) -> Result<Vec<Produto>, sqlx::Error> {
    sqlx::query_as::<_, Produto>(
        "SELECT p.id, p.nome, p.sku, p.category_id, p.preco, p.estoque, p.estoque_minimo, p.imagem \
         FROM products p JOIN categories c ON c.id = p.category_id \
         WHERE c.name = $1 AND (p.estoque <= p.estoque_minimo OR p.estoque <= 0) \
         ORDER BY p.id",
    )
    .bind(CATEGORIA_COM_ESTOQUE)
    .fetch_all(pool)
    .await
}

pub async fn inserir(pool: &PgPool, produto: &NovoProduto) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO products (nome, sku, category_id, preco, estoque, estoque_minimo, imagem) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
    )
    .bind(&produto.nome)
    .bind(&produto.sku)
    .bind(produto.category_id)
    .bind(&produto.preco)
    .bind(produto.estoque)
    .bind(produto.estoque_minimo)
    .bind(&produto.imagem)
    .fetch_one(pool)
    .await
}

pub async fn atualizar(pool: &PgPool, id: i32, produto: &NovoProduto) -> Result<u64, sqlx::Error> {
    let resultado = sqlx::query(
        "UPDATE products SET nome = $1, sku = $2, category_id = $3, preco = $4, estoque = $5, \
         estoque_minimo = $6, imagem = $7 WHERE id = $8",
    )
    .bind(&produto.nome)
    .bind(&produto.sku)
    .bind(produto.category_id)
    .bind(&produto.preco)
    .bind(produto.estoque)
    .bind(produto.estoque_minimo)
    .bind(&produto.imagem)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(resultado.rows_affected())
}

pub async fn excluir(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let resultado = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(resultado.rows_affected())
}

/// Busca o produto com o nome da categoria. Recebe uma conexão para poder
/// rodar tanto no pool quanto dentro da transação de venda.
pub async fn buscar_estoque(conn: &mut PgConnection, id: i32) -> Result<Option<ProdutoEstoque>, sqlx::Error> {
    sqlx::query_as::<_, ProdutoEstoque>(
        "SELECT p.id, p.nome, p.preco, p.estoque, c.name AS categoria_nome \
         FROM products p LEFT JOIN categories c ON c.id = p.category_id \
         WHERE p.id = $1",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Baixa de estoque sem piso: o limite é verificado antes, no carrinho.
pub async fn baixar_estoque(conn: &mut PgConnection, id: i32, quantidade: i32) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE products SET estoque = estoque - $1 WHERE id = $2")
        .bind(quantidade)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(())
}

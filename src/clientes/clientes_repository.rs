// src/clientes/clientes_repository.rs

use sqlx::PgPool;

use super::clientes_structs::{Cliente, ClienteRow, NovoCliente};

pub async fn listar(pool: &PgPool) -> Result<Vec<Cliente>, sqlx::Error> {
    let linhas = sqlx::query_as::<_, ClienteRow>(
        "SELECT id, nome, tipo_documento, documento, email, telefone, veiculo, \
         logradouro, bairro, cep, cidade, uf FROM customers ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(linhas.into_iter().map(Cliente::from).collect())
}

pub async fn contar(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await
}

pub async fn inserir(pool: &PgPool, cliente: &NovoCliente) -> Result<i32, sqlx::Error> {
    let endereco = &cliente.endereco;
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO customers (nome, tipo_documento, documento, email, telefone, veiculo, \
         logradouro, bairro, cep, cidade, uf) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING id",
    )
    .bind(&cliente.nome)
    .bind(cliente.tipo_documento.as_str())
    .bind(&cliente.documento)
    .bind(&cliente.email)
    .bind(&cliente.telefone)
    .bind(&cliente.veiculo)
    .bind(&endereco.logradouro)
    .bind(&endereco.bairro)
    .bind(&endereco.cep)
    .bind(&endereco.cidade)
    .bind(&endereco.uf)
    .fetch_one(pool)
    .await
}

pub async fn atualizar(pool: &PgPool, id: i32, cliente: &NovoCliente) -> Result<u64, sqlx::Error> {
    let endereco = &cliente.endereco;
    let resultado = sqlx::query(
        "UPDATE customers SET nome = $1, tipo_documento = $2, documento = $3, email = $4, \
         telefone = $5, veiculo = $6, logradouro = $7, bairro = $8, cep = $9, cidade = $10, uf = $11 \
         WHERE id = $12",
    )
    .bind(&cliente.nome)
    .bind(cliente.tipo_documento.as_str())
    .bind(&cliente.documento)
    .bind(&cliente.email)
    .bind(&cliente.telefone)
    .bind(&cliente.veiculo)
    .bind(&endereco.logradouro)
    .bind(&endereco.bairro)
    .bind(&endereco.cep)
    .bind(&endereco.cidade)
    .bind(&endereco.uf)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(resultado.rows_affected())
}

pub async fn excluir(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let resultado = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(resultado.rows_affected())
}

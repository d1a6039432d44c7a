// src/usuarios/usuario_repository.rs

use sqlx::PgPool;

use super::usuario_structs::{Usuario, UsuarioPublico, UsuarioRow};

pub async fn listar(pool: &PgPool) -> Result<Vec<UsuarioPublico>, sqlx::Error> {
    let linhas = sqlx::query_as::<_, UsuarioRow>("SELECT id, name, email, role FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(linhas.into_iter().map(UsuarioPublico::from).collect())
}

pub async fn contar(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
}

pub async fn buscar_por_email(pool: &PgPool, email: &str) -> Result<Option<Usuario>, sqlx::Error> {
    sqlx::query_as::<_, Usuario>("SELECT id, name, email, password, role FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn inserir(
    pool: &PgPool,
    nome: &str,
    email: &str,
    senha_hash: &str,
    perfil: &str,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (name, email, password, role) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(nome)
    .bind(email)
    .bind(senha_hash)
    .bind(perfil)
    .fetch_one(pool)
    .await
}

/// Atualiza nome, email e perfil; a senha só muda quando um novo hash é informado.
pub async fn atualizar(
    pool: &PgPool,
    id: i32,
    nome: &str,
    email: &str,
    perfil: &str,
    senha_hash: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let resultado = match senha_hash {
        Some(hash) => {
            sqlx::query("UPDATE users SET name = $1, email = $2, role = $3, password = $4 WHERE id = $5")
                .bind(nome)
                .bind(email)
                .bind(perfil)
                .bind(hash)
                .bind(id)
                .execute(pool)
                .await?
        }
        None => {
            sqlx::query("UPDATE users SET name = $1, email = $2, role = $3 WHERE id = $4")
                .bind(nome)
                .bind(email)
                .bind(perfil)
                .bind(id)
                .execute(pool)
                .await?
        }
    };
    Ok(resultado.rows_affected())
}

pub async fn excluir(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let resultado = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(resultado.rows_affected())
}

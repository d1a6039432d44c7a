// src/dados_iniciais.rs

//! Dados de demonstração gravados num banco recém-criado.

use sqlx::{PgConnection, PgPool};

use crate::categorias::categoria_structs::CATEGORIA_COM_ESTOQUE;
use crate::usuarios::senha;

const CATEGORIA_SERVICOS: &str = "Serviços";

// (nome, sku, categoria, preço, estoque, estoque mínimo, imagem)
const PRODUTOS: [(&str, &str, &str, &str, i32, i32, &str); 4] = [
    ("Troca de Óleo - Sintético", "SERV-001", CATEGORIA_SERVICOS, "250.00", 999, 0,
     "https://placehold.co/300x200/3B82F6/FFFFFF?text=Troca+de+Oleo"),
    ("Alinhamento e Balanceamento", "SERV-002", CATEGORIA_SERVICOS, "120.00", 999, 0,
     "https://placehold.co/300x200/3B82F6/FFFFFF?text=Alinhamento"),
    ("Pneu Aro 15", "PEC-001", CATEGORIA_COM_ESTOQUE, "350.00", 20, 10,
     "https://placehold.co/300x200/F97316/FFFFFF?text=Pneu+Aro+15"),
    ("Filtro de Ar", "PEC-002", CATEGORIA_COM_ESTOQUE, "45.00", 50, 15,
     "https://placehold.co/300x200/F97316/FFFFFF?text=Filtro+de+Ar"),
];

// (nome, tipo, documento, email, telefone, veículo, logradouro, bairro, cep, cidade, uf)
const CLIENTES: [[&str; 11]; 2] = [
    ["João da Silva", "CPF", "12345678901", "joao.silva@example.com", "(11) 98765-4321",
     "Honda Civic 2020", "Rua das Flores, 123", "Centro", "01001-000", "São Paulo", "SP"],
    ["Auto Peças Veloz Ltda", "CNPJ", "12345678000199", "compras@velocars.com", "(21) 2345-6789",
     "Frota", "Avenida Brasil, 1000", "Bonsucesso", "21040-360", "Rio de Janeiro", "RJ"],
];

// (nome, email, senha, perfil)
const USUARIOS: [(&str, &str, &str, &str); 2] = [
    ("Admin", "admin@demo.com", "admin", "admin"),
    ("Vendedor", "seller@demo.com", "seller", "seller"),
];

#[derive(Debug, thiserror::Error)]
pub enum ErroDadosIniciais {
    #[error(transparent)]
    Banco(#[from] sqlx::Error),

    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),
}

/// Popula o banco quando ainda não há nenhum usuário. Tudo numa transação.
/// Devolve `true` se os dados foram gravados.
pub async fn popular_se_vazio(pool: &PgPool, bcrypt_cost: u32) -> Result<bool, ErroDadosIniciais> {
    let usuarios: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if usuarios > 0 {
        return Ok(false);
    }

    log::info!("Banco de dados vazio, populando com dados iniciais...");
    let mut transaction = pool.begin().await?;
    popular(&mut transaction, bcrypt_cost).await?;
    transaction.commit().await?;
    log::info!("Dados iniciais gravados com sucesso.");
    Ok(true)
}

async fn popular(conn: &mut PgConnection, bcrypt_cost: u32) -> Result<(), ErroDadosIniciais> {
    for categoria in [CATEGORIA_SERVICOS, CATEGORIA_COM_ESTOQUE] {
        sqlx::query("INSERT INTO categories (name) SELECT $1 WHERE NOT EXISTS (SELECT 1 FROM categories WHERE name = $1)")
            .bind(categoria)
            .execute(&mut *conn)
            .await?;
    }

    for (nome, sku, categoria, preco, estoque, minimo, imagem) in PRODUTOS {
        sqlx::query(
            "INSERT INTO products (nome, sku, category_id, preco, estoque, estoque_minimo, imagem) \
             SELECT $1, $2, (SELECT MIN(id) FROM categories WHERE name = $3), $4::NUMERIC, $5, $6, $7 \
             ON CONFLICT (sku) DO NOTHING",
        )
        .bind(nome)
        .bind(sku)
        .bind(categoria)
        .bind(preco)
        .bind(estoque)
        .bind(minimo)
        .bind(imagem)
        .execute(&mut *conn)
        .await?;
    }

    for [nome, tipo, documento, email, telefone, veiculo, logradouro, bairro, cep, cidade, uf] in CLIENTES {
        sqlx::query(
            "INSERT INTO customers (nome, tipo_documento, documento, email, telefone, veiculo, \
             logradouro, bairro, cep, cidade, uf) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(nome)
        .bind(tipo)
        .bind(documento)
        .bind(email)
        .bind(telefone)
        .bind(veiculo)
        .bind(logradouro)
        .bind(bairro)
        .bind(cep)
        .bind(cidade)
        .bind(uf)
        .execute(&mut *conn)
        .await?;
    }

    for (nome, email, senha_texto, perfil) in USUARIOS {
        let hash = senha::gerar_hash(senha_texto, bcrypt_cost)?;
        sqlx::query("INSERT INTO users (name, email, password, role) VALUES ($1, $2, $3, $4)")
            .bind(nome)
            .bind(email)
            .bind(hash)
            .bind(perfil)
            .execute(&mut *conn)
            .await?;
    }

    sqlx::query("UPDATE store_info SET nome = $1, doc = $2, endereco = $3, contato = $4 WHERE id = 1")
        .bind("Oficina Mecânica Rápida")
        .bind("CNPJ: 98.765.432/0001-10")
        .bind("Rua Principal, 456 - Bairro Auto - Cidade, UF")
        .bind("Telefone: (55) 3333-4444 | Email: contato@oficinarapida.com")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requer PostgreSQL em DATABASE_URL"]
    async fn popula_uma_unica_vez(pool: PgPool) {
        assert!(popular_se_vazio(&pool, 4).await.unwrap());
        assert!(!popular_se_vazio(&pool, 4).await.unwrap());

        let pneu: (i32, String) = sqlx::query_as(
            "SELECT p.estoque, c.name FROM products p JOIN categories c ON c.id = p.category_id WHERE p.sku = 'PEC-001'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(pneu, (20, "Peças".to_string()));

        let usuarios: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users").fetch_one(&pool).await.unwrap();
        assert_eq!(usuarios, 2);
    }
}

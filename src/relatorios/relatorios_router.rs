// src/relatorios/relatorios_router.rs

use actix_web::{get, web, HttpResponse};

use super::relatorios_repository;
use super::relatorios_structs::{ticket_medio, ResumoVendas};
use crate::clientes::clientes_repository;
use crate::shared::erros::ApiError;
use crate::usuarios::auth_middleware::ExigeAdmin;
use crate::AppState;

/// Receita, quantidade de vendas, ticket médio, clientes e rankings.
#[get("/reports/summary")]
pub async fn resumo_vendas(
    data: web::Data<AppState>,
    _admin: ExigeAdmin,
) -> Result<HttpResponse, ApiError> {
    let pool = &data.db_pool;
    let (receita_total, total_vendas) = relatorios_repository::receita_e_quantidade(pool).await?;

    let resumo = ResumoVendas {
        ticket_medio: ticket_medio(&receita_total, total_vendas),
        receita_total,
        total_vendas,
        clientes_cadastrados: clientes_repository::contar(pool).await?,
        mais_vendidos: relatorios_repository::mais_vendidos(pool).await?,
        ultimas_vendas: relatorios_repository::ultimas_vendas(pool).await?,
    };
    Ok(HttpResponse::Ok().json(resumo))
}

/// Histórico de transações com o nome do cliente ("Balcão" quando não há).
#[get("/reports/financial")]
pub async fn historico_financeiro(
    data: web::Data<AppState>,
    _admin: ExigeAdmin,
) -> Result<HttpResponse, ApiError> {
    let lancamentos = relatorios_repository::historico_financeiro(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(lancamentos))
}

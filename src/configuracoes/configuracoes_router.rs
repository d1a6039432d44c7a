// src/configuracoes/configuracoes_router.rs

use actix_web::{get, put, web, HttpResponse};

use super::configuracoes_repository;
use super::configuracoes_structs::DadosLoja;
use crate::shared::erros::ApiError;
use crate::usuarios::auth_middleware::ExigeAdmin;
use crate::AppState;

#[get("/settings/store-info")]
pub async fn buscar_dados_loja(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let dados = configuracoes_repository::buscar(&data.db_pool)
        .await?
        .ok_or_else(|| ApiError::NaoEncontrado("Informações da loja não cadastradas.".to_string()))?;
    Ok(HttpResponse::Ok().json(dados))
}

/// Substitui os dados da loja. Não há cadastro nem exclusão: a linha é criada pela migração.
#[put("/settings/store-info")]
pub async fn atualizar_dados_loja(
    data: web::Data<AppState>,
    _admin: ExigeAdmin,
    dados: web::Json<DadosLoja>,
) -> Result<HttpResponse, ApiError> {
    let dados = dados.into_inner();
    if configuracoes_repository::atualizar(&data.db_pool, &dados).await? == 0 {
        log::warn!("Linha de store_info ausente; dados da loja não gravados");
    }
    Ok(HttpResponse::Ok().json(dados))
}

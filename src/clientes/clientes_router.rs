// src/clientes/clientes_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};

use super::clientes_repository;
use super::clientes_structs::NovoCliente;

use crate::shared::erros::ApiError;
use crate::AppState;

/// Rota para listar os clientes, com o endereço aninhado.
#[get("/customers")]
pub async fn buscar_clientes(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let clientes = clientes_repository::listar(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(clientes))
}

#[post("/customers")]
pub async fn cadastrar_cliente(
    data: web::Data<AppState>,
    item: web::Json<NovoCliente>,
) -> Result<HttpResponse, ApiError> {
    let item = item.into_inner();
    item.validar()?;

    let id = clientes_repository::inserir(&data.db_pool, &item).await?;
    log::info!("Cliente {} cadastrado", id);
    Ok(HttpResponse::Created().json(item.com_id(id)))
}

#[put("/customers/{id}")]
pub async fn atualizar_cliente(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<NovoCliente>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let item = item.into_inner();
    item.validar()?;

    if clientes_repository::atualizar(&data.db_pool, id, &item).await? == 0 {
        log::warn!("Atualização de cliente inexistente (id {})", id);
    }
    Ok(HttpResponse::Ok().json(item.com_id(id)))
}

/// Vendas do cliente excluído passam a constar como venda de balcão.
#[delete("/customers/{id}")]
pub async fn deletar_cliente(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    clientes_repository::excluir(&data.db_pool, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

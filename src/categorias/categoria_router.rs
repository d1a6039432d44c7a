// src/categorias/categoria_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};

// Importa as structs de categoria
use super::categoria_repository;
use super::categoria_structs::{Categoria, NovaCategoria};

use crate::shared::erros::{exigir_preenchido, ApiError};
use crate::usuarios::auth_middleware::ExigeAdmin;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para buscar todas as categorias, ordenadas por id.
#[get("/categories")]
pub async fn buscar_categorias(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let categorias = categoria_repository::listar(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(categorias))
}

/// Rota para cadastrar uma nova categoria.
#[post("/categories")]
pub async fn cadastrar_categoria(
    data: web::Data<AppState>,
    _admin: ExigeAdmin,
    item: web::Json<NovaCategoria>,
) -> Result<HttpResponse, ApiError> {
    exigir_preenchido(&item.name, "O nome da categoria é obrigatório.")?;

    let categoria = categoria_repository::inserir(&data.db_pool, item.name.trim()).await?;
    log::info!("Categoria {} cadastrada: {}", categoria.id, categoria.name);
    Ok(HttpResponse::Created().json(categoria))
}

/// Rota para atualizar uma categoria existente.
/// Um id inexistente não gera erro; a resposta ecoa o registro enviado.
#[put("/categories/{id}")]
pub async fn atualizar_categoria(
    data: web::Data<AppState>,
    _admin: ExigeAdmin,
    path: web::Path<i32>,
    item: web::Json<NovaCategoria>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    exigir_preenchido(&item.name, "O nome da categoria é obrigatório.")?;

    let nome = item.name.trim();
    if categoria_repository::atualizar(&data.db_pool, id, nome).await? == 0 {
        log::warn!("Atualização de categoria inexistente (id {})", id);
    }

    Ok(HttpResponse::Ok().json(Categoria {
        id,
        name: nome.to_string(),
    }))
}

/// Rota para deletar uma categoria.
/// Categorias em uso por algum produto não podem ser excluídas.
#[delete("/categories/{id}")]
pub async fn deletar_categoria(
    data: web::Data<AppState>,
    _admin: ExigeAdmin,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let em_uso = categoria_repository::contar_produtos(&data.db_pool, id).await?;
    if em_uso > 0 {
        log::warn!("Categoria {} em uso por {} produto(s), exclusão recusada", id, em_uso);
        return Err(ApiError::Conflito(
            "Não é possível excluir esta categoria, pois ela está sendo usada por um ou mais produtos."
                .to_string(),
        ));
    }

    categoria_repository::excluir(&data.db_pool, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

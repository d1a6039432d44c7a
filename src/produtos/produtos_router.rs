// src/produtos/produtos_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};

// Importa as structs definidas no módulo `produtos_structs` dentro da mesma pasta `produtos`
use super::produtos_repository;
use super::produtos_structs::NovoProduto;

use crate::shared::erros::ApiError;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

const SKU_DUPLICADO: &str = "SKU já cadastrado.";

/// Rota para buscar todos os produtos, ordenados por id.
#[get("/products")]
pub async fn buscar_produtos(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let produtos = produtos_repository::listar(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(produtos))
}

/// Rota para listar as peças com estoque no mínimo ou esgotado.
#[get("/products/low-stock")]
pub async fn buscar_produtos_estoque_baixo(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let produtos = produtos_repository::listar_estoque_baixo(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(produtos))
}

/// Rota para inserir um novo produto no banco de dados.
///
/// Recebe os dados do novo produto via JSON no corpo da requisição e
/// devolve o registro completo com o id gerado. SKU repetido gera 409.
#[post("/products")]
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    item: web::Json<NovoProduto>,
) -> Result<HttpResponse, ApiError> {
    let item = item.into_inner().normalizado();
    item.validar()?;

    let id = produtos_repository::inserir(&data.db_pool, &item)
        .await
        .map_err(|e| ApiError::de_violacao_unica(e, SKU_DUPLICADO))?;

    log::info!("Produto {} cadastrado (SKU {})", id, item.sku);
    Ok(HttpResponse::Created().json(item.com_id(id)))
}

/// Rota para atualizar um produto. Substitui todos os campos editáveis.
#[put("/products/{id}")]
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<NovoProduto>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let item = item.into_inner().normalizado();
    item.validar()?;

    let afetados = produtos_repository::atualizar(&data.db_pool, id, &item)
        .await
        .map_err(|e| ApiError::de_violacao_unica(e, SKU_DUPLICADO))?;
    if afetados == 0 {
        log::warn!("Atualização de produto inexistente (id {})", id);
    }

    Ok(HttpResponse::Ok().json(item.com_id(id)))
}

/// Rota para deletar um produto. As vendas antigas mantêm nome e preço do item.
#[delete("/products/{id}")]
pub async fn deletar_produto(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    produtos_repository::excluir(&data.db_pool, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::testes::{app_state_sem_banco, banco_de_teste_state};

    #[actix_web::test]
    async fn corpo_invalido_vira_erro_json() {
        let app = test::init_service(
            App::new()
                .app_data(app_state_sem_banco(false))
                .configure(crate::configurar_rotas),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/products")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ nome: ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: serde_json::Value = test::read_body_json(resp).await;
        assert!(corpo["error"].is_string());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requer PostgreSQL em DATABASE_URL"]
    async fn cadastro_e_leitura_preservam_campos_e_sku_e_unico(pool: sqlx::PgPool) {
        let app = test::init_service(
            App::new()
                .app_data(banco_de_teste_state(pool))
                .configure(crate::configurar_rotas),
        )
        .await;

        let produto = json!({
            "nome": "Pneu Aro 15",
            "sku": "PEC-001",
            "categoryId": null,
            "preco": 350.5,
            "estoque": 20,
            "estoqueMinimo": 10,
            "imagem": "https://placehold.co/300x200"
        });

        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/products").set_json(&produto).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let lista: Vec<serde_json::Value> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/products").to_request(),
        )
        .await;
        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0]["preco"], json!(350.5));
        assert_eq!(lista[0]["estoque"], json!(20));
        assert_eq!(lista[0]["estoqueMinimo"], json!(10));
        assert_eq!(lista[0]["imagem"], produto["imagem"]);

        let repetido = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/products").set_json(&produto).to_request(),
        )
        .await;
        assert_eq!(repetido.status(), StatusCode::CONFLICT);
        let corpo: serde_json::Value = test::read_body_json(repetido).await;
        assert_eq!(corpo["error"], "SKU já cadastrado.");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requer PostgreSQL em DATABASE_URL"]
    async fn preco_com_centavos_volta_com_os_mesmos_digitos(pool: sqlx::PgPool) {
        let app = test::init_service(
            App::new()
                .app_data(banco_de_teste_state(pool))
                .configure(crate::configurar_rotas),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/products")
                .set_json(json!({ "nome": "Arruela", "sku": "PEC-010", "preco": 0.35, "estoque": 100 }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let criado: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(criado["preco"], json!(0.35));

        let lista: Vec<serde_json::Value> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/products").to_request(),
        )
        .await;
        assert_eq!(lista[0]["preco"], json!(0.35));
    }
}

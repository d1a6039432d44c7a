// src/vendas/vendas_router.rs

use actix_web::{get, post, web, HttpResponse};

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;
use crate::produtos::produtos_repository;
use crate::shared::erros::ApiError;
// Importa as structs de vendas
use super::vendas_repository;
use super::vendas_service::registrar_venda;
use super::vendas_structs::{AdicionarAoCarrinho, Carrinho, NovaVenda, VendaResponse};

/// Rota para listar as vendas, cada uma com seus itens.
#[get("/sales")]
pub async fn buscar_vendas(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let vendas = vendas_repository::listar_com_itens(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(vendas))
}

/// Rota para realizar uma venda a partir dos itens do carrinho.
///
/// Subtotal, total, troco e número são calculados no servidor; a gravação
/// do cabeçalho, dos itens e a baixa de estoque acontecem numa só transação.
#[post("/sales")]
pub async fn realizar_venda(
    data: web::Data<AppState>,
    venda: web::Json<NovaVenda>,
) -> Result<HttpResponse, ApiError> {
    let (carrinho, pagamento, cliente_id) = venda.into_inner().separar();

    let registrada = registrar_venda(&data.db_pool, &carrinho, &pagamento, cliente_id).await?;

    Ok(HttpResponse::Created().json(VendaResponse {
        message: "Venda registrada com sucesso!".to_string(),
        sale_id: registrada.venda.id,
        numero: registrada.venda.numero,
        subtotal: registrada.venda.subtotal,
        total: registrada.venda.total,
        troco: registrada.venda.troco,
    }))
}

/// Rota para adicionar uma unidade de um produto ao carrinho.
///
/// O carrinho continua sendo do cliente: ele envia os itens atuais e recebe
/// o carrinho atualizado. Peças sem estoque ou no limite do estoque dão 409
/// e o carrinho não muda.
#[post("/sales/cart/items")]
pub async fn adicionar_item_carrinho(
    data: web::Data<AppState>,
    pedido: web::Json<AdicionarAoCarrinho>,
) -> Result<HttpResponse, ApiError> {
    let pedido = pedido.into_inner();
    let mut carrinho = Carrinho::new(pedido.itens);
    carrinho.validar_linhas()?;

    let mut conn = data.db_pool.acquire().await?;
    let produto = produtos_repository::buscar_estoque(&mut conn, pedido.product_id)
        .await?
        .ok_or_else(|| {
            ApiError::NaoEncontrado(format!(
                "Produto com ID {} não encontrado para adicionar ao carrinho.",
                pedido.product_id
            ))
        })?;

    if let Err(e) = carrinho.adicionar(&produto) {
        log::warn!("Produto {} recusado no carrinho: {}", produto.id, e);
        return Err(e);
    }

    Ok(HttpResponse::Ok().json(carrinho))
}

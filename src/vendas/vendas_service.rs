// src/vendas/vendas_service.rs

use sqlx::{PgConnection, PgPool};
use thiserror::Error;

use super::vendas_repository;
use super::vendas_structs::{formatar_numero, Carrinho, Pagamento, Totais, VendaComItens};
use crate::produtos::produtos_repository;
use crate::shared::erros::ApiError;

/// Falhas dentro da transação de venda. Qualquer uma desfaz a venda inteira.
#[derive(Debug, Error)]
enum ErroVenda {
    #[error("produto {0} não encontrado")]
    ProdutoInexistente(i32),

    #[error(transparent)]
    Banco(#[from] sqlx::Error),
}

impl From<ErroVenda> for ApiError {
    fn from(erro: ErroVenda) -> Self {
        match erro {
            ErroVenda::ProdutoInexistente(id) => {
                ApiError::Validacao(format!("Produto com ID {} não encontrado para venda.", id))
            }
            ErroVenda::Banco(e) => ApiError::Transacao(e),
        }
    }
}

/// Registra uma venda de forma atômica.
///
/// Dentro de uma única transação:
/// 1. Calcula os totais e o número da venda.
/// 2. Grava o cabeçalho da venda.
/// 3. Para cada item, na ordem do carrinho, grava o item e, se o produto
///    for da categoria "Peças", baixa o estoque pela quantidade vendida.
/// 4. Comita. Em qualquer falha, faz rollback antes de devolver o erro:
///    nenhuma venda parcial e nenhuma baixa parcial ficam visíveis.
pub async fn registrar_venda(
    pool: &PgPool,
    carrinho: &Carrinho,
    pagamento: &Pagamento,
    cliente_id: Option<i32>,
) -> Result<VendaComItens, ApiError> {
    let totais = Totais::calcular(carrinho, pagamento)?;
    let carrinho = carrinho.normalizado();

    // Inicia uma transação no banco de dados para garantir atomicidade
    let mut transaction = pool.begin().await.map_err(ApiError::Transacao)?;

    match gravar_venda(&mut transaction, &carrinho, pagamento, cliente_id, &totais).await {
        Ok(venda) => {
            transaction.commit().await.map_err(ApiError::Transacao)?;
            log::info!(
                "Venda {} (id {}) registrada: {} item(ns), total {}",
                venda.venda.numero,
                venda.venda.id,
                venda.itens.len(),
                venda.venda.total
            );
            Ok(venda)
        }
        Err(erro) => {
            if let Err(e) = transaction.rollback().await {
                log::error!("Erro ao desfazer transação de venda: {:?}", e);
            }
            log::warn!("Venda desfeita: {}", erro);
            Err(erro.into())
        }
    }
}

async fn gravar_venda(
    conn: &mut PgConnection,
    carrinho: &Carrinho,
    pagamento: &Pagamento,
    cliente_id: Option<i32>,
    totais: &Totais,
) -> Result<VendaComItens, ErroVenda> {
    // Contagem dentro da transação; não é chave única, o id é.
    let numero = formatar_numero(vendas_repository::contar(&mut *conn).await?);
    let venda = vendas_repository::inserir_venda(&mut *conn, &numero, totais, pagamento, cliente_id).await?;

    let mut itens = Vec::with_capacity(carrinho.itens.len());
    for linha in &carrinho.itens {
        let produto = produtos_repository::buscar_estoque(&mut *conn, linha.product_id)
            .await?
            .ok_or(ErroVenda::ProdutoInexistente(linha.product_id))?;

        itens.push(vendas_repository::inserir_item(&mut *conn, venda.id, linha).await?);

        if produto.controla_estoque() {
            produtos_repository::baixar_estoque(&mut *conn, produto.id, linha.qtd).await?;
        }
    }

    Ok(VendaComItens { venda, itens })
}

// src/shared/erros.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::shared_structs::ErroResponse;

/// SQLSTATE do PostgreSQL para violação de restrição UNIQUE.
const UNIQUE_VIOLATION: &str = "23505";

/// Mensagem única para falhas de login; email inexistente e senha errada não se distinguem.
pub const CREDENCIAIS_INVALIDAS: &str = "Email ou senha inválidos.";

/// Erros que os handlers devolvem. Cada variante tem seu status HTTP e
/// todas são serializadas como `{ "error": "..." }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validacao(String),

    #[error("{0}")]
    Conflito(String),

    #[error("{0}")]
    SemEstoque(String),

    #[error("{}", CREDENCIAIS_INVALIDAS)]
    CredenciaisInvalidas,

    #[error("{0}")]
    NaoAutorizado(String),

    #[error("{0}")]
    Proibido(String),

    #[error("{0}")]
    NaoEncontrado(String),

    #[error("falha na transação de venda: {0}")]
    Transacao(#[source] sqlx::Error),

    #[error("erro de banco de dados: {0}")]
    Banco(#[from] sqlx::Error),

    #[error("erro ao processar senha: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("erro ao gerar token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Converte uma violação de UNIQUE em `Conflito`; qualquer outro erro continua sendo de banco.
    pub fn de_violacao_unica(erro: sqlx::Error, mensagem: &str) -> ApiError {
        match &erro {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                ApiError::Conflito(mensagem.to_string())
            }
            _ => ApiError::Banco(erro),
        }
    }

    /// Texto exposto ao cliente. Falhas internas não vazam detalhes.
    fn mensagem_publica(&self) -> String {
        match self {
            ApiError::Transacao(_) => "Não foi possível registrar a venda.".to_string(),
            ApiError::Banco(_) | ApiError::Hash(_) | ApiError::Token(_) => {
                "Erro interno do servidor.".to_string()
            }
            outro => outro.to_string(),
        }
    }
}

/// Falha com `Validacao` quando o campo obrigatório está vazio ou só tem espaços.
pub fn exigir_preenchido(valor: &str, mensagem: &str) -> Result<(), ApiError> {
    if valor.trim().is_empty() {
        return Err(ApiError::Validacao(mensagem.to_string()));
    }
    Ok(())
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validacao(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflito(_) | ApiError::SemEstoque(_) => StatusCode::CONFLICT,
            ApiError::CredenciaisInvalidas | ApiError::NaoAutorizado(_) => StatusCode::UNAUTHORIZED,
            ApiError::Proibido(_) => StatusCode::FORBIDDEN,
            ApiError::NaoEncontrado(_) => StatusCode::NOT_FOUND,
            ApiError::Transacao(_) | ApiError::Banco(_) | ApiError::Hash(_) | ApiError::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(status).json(ErroResponse {
            error: self.mensagem_publica(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn mapeia_status_http() {
        assert_eq!(ApiError::Validacao("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Conflito("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::SemEstoque("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::CredenciaisInvalidas.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Proibido("x".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NaoEncontrado("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Transacao(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn erro_que_nao_e_unique_continua_de_banco() {
        let erro = ApiError::de_violacao_unica(sqlx::Error::RowNotFound, "SKU já cadastrado.");
        assert!(matches!(erro, ApiError::Banco(_)));
    }

    #[actix_web::test]
    async fn corpo_de_erro_interno_nao_vaza_detalhes() {
        let resposta = ApiError::Banco(sqlx::Error::PoolTimedOut).error_response();
        assert_eq!(resposta.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let corpo = to_bytes(resposta.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&corpo).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Erro interno do servidor." }));
    }

    #[actix_web::test]
    async fn corpo_de_erro_de_validacao_repete_a_mensagem() {
        let resposta = ApiError::Validacao("O nome é obrigatório.".into()).error_response();
        let corpo = to_bytes(resposta.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&corpo).unwrap();
        assert_eq!(json["error"], "O nome é obrigatório.");
    }
}

// src/usuarios/auth_middleware.rs

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use futures::future::{ready, Ready};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

// Importa as Claims do módulo de structs de usuário
use super::usuario_structs::{Claims, Perfil, UsuarioPublico};
use crate::shared::erros::ApiError;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Usuário identificado pelo token JWT da requisição.
#[derive(Debug, Clone)]
pub struct UsuarioAutenticado {
    pub user_id: i32,
    pub user_name: String,
    pub user_email: String,
    pub perfil: Perfil,
}

/// Gera o token HS256 entregue no login.
pub fn emitir_token(
    usuario: &UsuarioPublico,
    segredo: &str,
    horas: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: usuario.id,
        name: usuario.name.clone(),
        email: usuario.email.clone(),
        role: usuario.role,
        exp: (Utc::now() + Duration::hours(horas)).timestamp(),
    };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(segredo.as_ref()))
}

/// Decodifica e valida o token (assinatura e expiração).
pub fn validar_token(token: &str, segredo: &str) -> Result<UsuarioAutenticado, ApiError> {
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(segredo.as_ref()), &validation)
        .map_err(|e| {
            log::warn!("Token rejeitado: {:?}", e.kind());
            let mensagem = match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => "Token expirado.",
                jsonwebtoken::errors::ErrorKind::InvalidSignature => "Assinatura do token inválida.",
                jsonwebtoken::errors::ErrorKind::InvalidToken => "Token malformado.",
                _ => "Token de autenticação inválido.",
            };
            ApiError::NaoAutorizado(mensagem.to_string())
        })?;

    Ok(UsuarioAutenticado {
        user_id: token_data.claims.sub,
        user_name: token_data.claims.name,
        user_email: token_data.claims.email,
        perfil: token_data.claims.role,
    })
}

fn token_do_cabecalho(req: &HttpRequest) -> Result<&str, ApiError> {
    let valor = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| ApiError::NaoAutorizado("Token de autenticação ausente.".to_string()))?
        .to_str()
        .map_err(|_| ApiError::NaoAutorizado("Token de autenticação inválido.".to_string()))?;

    valor.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::NaoAutorizado("Formato de token inválido. Esperado 'Bearer <token>'.".to_string())
    })
}

/// Extrator das rotas administrativas.
///
/// Com `exigir_perfil_admin` desligado a rota fica aberta e o valor é `None`.
/// Ligado, exige `Authorization: Bearer <token>` de um usuário `admin`:
/// sem token ou token inválido dá 401, perfil `seller` dá 403.
#[derive(Debug)]
pub struct ExigeAdmin(pub Option<UsuarioAutenticado>);

impl ExigeAdmin {
    fn extrair(req: &HttpRequest) -> Result<Self, ApiError> {
        let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
            log::error!("AppState não disponível no extrator de autenticação");
            ApiError::NaoAutorizado("Erro de configuração do servidor.".to_string())
        })?;

        if !state.config.exigir_perfil_admin {
            return Ok(ExigeAdmin(None));
        }

        let usuario = validar_token(token_do_cabecalho(req)?, &state.config.jwt_secret)?;
        if usuario.perfil != Perfil::Admin {
            log::warn!("Usuário {} sem perfil admin tentou acessar {}", usuario.user_email, req.path());
            return Err(ApiError::Proibido("Acesso restrito a administradores.".to_string()));
        }
        Ok(ExigeAdmin(Some(usuario)))
    }
}

impl FromRequest for ExigeAdmin {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(ExigeAdmin::extrair(req).map_err(actix_web::Error::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};

    use crate::testes::{app_state_sem_banco, JWT_SECRET_TESTE};

    fn usuario(perfil: Perfil) -> UsuarioPublico {
        UsuarioPublico {
            id: 1,
            name: "Admin".to_string(),
            email: "admin@demo.com".to_string(),
            role: perfil,
        }
    }

    #[test]
    fn token_emitido_e_validado() {
        let token = emitir_token(&usuario(Perfil::Admin), "segredo", 1).unwrap();
        let autenticado = validar_token(&token, "segredo").unwrap();

        assert_eq!(autenticado.user_id, 1);
        assert_eq!(autenticado.user_email, "admin@demo.com");
        assert_eq!(autenticado.perfil, Perfil::Admin);
    }

    #[test]
    fn token_com_outro_segredo_e_rejeitado() {
        let token = emitir_token(&usuario(Perfil::Admin), "segredo", 1).unwrap();
        assert!(matches!(validar_token(&token, "outro"), Err(ApiError::NaoAutorizado(_))));
    }

    #[test]
    fn token_expirado_e_rejeitado() {
        let token = emitir_token(&usuario(Perfil::Admin), "segredo", -2).unwrap();
        match validar_token(&token, "segredo") {
            Err(ApiError::NaoAutorizado(mensagem)) => assert_eq!(mensagem, "Token expirado."),
            outro => panic!("esperava token expirado, veio {:?}", outro.map(|u| u.user_id)),
        }
    }

    #[actix_web::test]
    async fn rota_admin_sem_token_da_401() {
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state_sem_banco(true))
                .configure(crate::configurar_rotas),
        )
        .await;

        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/api/users").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn rota_admin_com_vendedor_da_403() {
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state_sem_banco(true))
                .configure(crate::configurar_rotas),
        )
        .await;

        let token = emitir_token(&usuario(Perfil::Seller), JWT_SECRET_TESTE, 1).unwrap();
        let req = actix_test::TestRequest::put()
            .uri("/api/settings/store-info")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "nome": "Oficina" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let corpo: serde_json::Value = actix_test::read_body_json(resp).await;
        assert_eq!(corpo["error"], "Acesso restrito a administradores.");
    }
}

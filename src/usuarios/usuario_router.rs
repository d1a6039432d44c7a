// src/usuarios/usuario_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};

// Importa as structs do módulo de usuários
use super::auth_middleware::{emitir_token, ExigeAdmin};
use super::senha;
use super::usuario_repository;
use super::usuario_structs::{LoginRequest, LoginResponse, NovoUsuario, Usuario, UsuarioPublico};
use crate::shared::erros::ApiError;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

const EMAIL_DUPLICADO: &str = "Email já cadastrado.";

/// Rota para login de usuário.
///
/// Email inexistente e senha errada devolvem exatamente o mesmo 401.
#[post("/users/login")]
pub async fn login_usuario(
    data: web::Data<AppState>,
    login_request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    // 1. Buscar o usuário pelo e-mail
    let usuario = usuario_repository::buscar_por_email(&data.db_pool, &login_request.email).await?;

    // 2. Verificar a senha
    let usuario = conferir_credenciais(usuario, &login_request.password, data.config.bcrypt_cost)?;

    // 3. Devolver o usuário sem a senha, com o token
    let usuario = UsuarioPublico::from(usuario);
    let token = emitir_token(&usuario, &data.config.jwt_secret, data.config.jwt_expiracao_horas)?;
    log::info!("Usuário {} autenticado", usuario.id);

    Ok(HttpResponse::Ok().json(LoginResponse { usuario, token }))
}

/// Confere a senha do usuário encontrado. Para email inexistente o custo do
/// bcrypt é pago do mesmo jeito, e o erro é o mesmo da senha errada.
fn conferir_credenciais(usuario: Option<Usuario>, senha_texto: &str, custo: u32) -> Result<Usuario, ApiError> {
    let confere = match &usuario {
        Some(u) => senha::confere(senha_texto, &u.password)?,
        None => {
            senha::gerar_hash(senha_texto, custo)?;
            false
        }
    };

    match usuario {
        Some(u) if confere => Ok(u),
        _ => {
            log::warn!("Tentativa de login com credenciais inválidas");
            Err(ApiError::CredenciaisInvalidas)
        }
    }
}

/// Rota para listar os usuários, sem as senhas.
#[get("/users")]
pub async fn buscar_usuarios(
    data: web::Data<AppState>,
    _admin: ExigeAdmin,
) -> Result<HttpResponse, ApiError> {
    let usuarios = usuario_repository::listar(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(usuarios))
}

/// Rota para cadastrar um novo usuário. A senha é obrigatória e gravada como hash.
#[post("/users")]
pub async fn cadastrar_usuario(
    data: web::Data<AppState>,
    _admin: ExigeAdmin,
    novo_usuario: web::Json<NovoUsuario>,
) -> Result<HttpResponse, ApiError> {
    let novo_usuario = novo_usuario.into_inner();
    novo_usuario.validar()?;

    let senha_texto = novo_usuario
        .nova_senha()
        .ok_or_else(|| ApiError::Validacao("Senha é obrigatória.".to_string()))?;
    let senha_hash = senha::gerar_hash(senha_texto, data.config.bcrypt_cost)?;

    let id = usuario_repository::inserir(
        &data.db_pool,
        novo_usuario.name.trim(),
        novo_usuario.email.trim(),
        &senha_hash,
        novo_usuario.role.as_str(),
    )
    .await
    .map_err(|e| ApiError::de_violacao_unica(e, EMAIL_DUPLICADO))?;

    log::info!("Usuário {} cadastrado com perfil {}", id, novo_usuario.role.as_str());
    Ok(HttpResponse::Created().json(novo_usuario.com_id(id)))
}

/// Rota para atualizar um usuário. Senha vazia ou ausente mantém a atual.
#[put("/users/{id}")]
pub async fn atualizar_usuario(
    data: web::Data<AppState>,
    _admin: ExigeAdmin,
    path: web::Path<i32>,
    usuario: web::Json<NovoUsuario>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let usuario = usuario.into_inner();
    usuario.validar()?;

    let senha_hash = match usuario.nova_senha() {
        Some(texto) => Some(senha::gerar_hash(texto, data.config.bcrypt_cost)?),
        None => None,
    };

    let afetados = usuario_repository::atualizar(
        &data.db_pool,
        id,
        usuario.name.trim(),
        usuario.email.trim(),
        usuario.role.as_str(),
        senha_hash.as_deref(),
    )
    .await
    .map_err(|e| ApiError::de_violacao_unica(e, EMAIL_DUPLICADO))?;
    if afetados == 0 {
        log::warn!("Atualização de usuário inexistente (id {})", id);
    }

    Ok(HttpResponse::Ok().json(usuario.com_id(id)))
}

/// Rota para excluir um usuário. O sistema nunca fica sem usuários.
#[delete("/users/{id}")]
pub async fn deletar_usuario(
    data: web::Data<AppState>,
    admin: ExigeAdmin,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if usuario_repository::contar(&data.db_pool).await? <= 1 {
        log::warn!("Exclusão do único usuário (id {}) recusada", id);
        return Err(ApiError::Conflito(
            "Não é possível excluir o único usuário do sistema.".to_string(),
        ));
    }

    usuario_repository::excluir(&data.db_pool, id).await?;
    if let Some(autor) = admin.0 {
        log::info!("Usuário {} excluído por {}", id, autor.user_email);
    }
    Ok(HttpResponse::NoContent().finish())
}

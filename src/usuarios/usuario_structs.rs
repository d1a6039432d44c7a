// src/usuarios/usuario_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::erros::{exigir_preenchido, ApiError};

/// Perfis de acesso. Vendedores não acessam as telas administrativas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perfil {
    Admin,
    #[default]
    Seller,
}

impl Perfil {
    pub fn as_str(&self) -> &'static str {
        match self {
            Perfil::Admin => "admin",
            Perfil::Seller => "seller",
        }
    }

    pub fn do_banco(valor: &str) -> Self {
        if valor == "admin" {
            Perfil::Admin
        } else {
            Perfil::Seller
        }
    }
}

/// Usuário como está no banco, com o hash da senha.
/// Não implementa Serialize: nunca sai pela API.
#[derive(FromRow)]
pub struct Usuario {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String, // Hash bcrypt
    pub role: String,
}

/// Usuário sem a senha, para leitura.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsuarioPublico {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Perfil,
}

impl From<Usuario> for UsuarioPublico {
    fn from(usuario: Usuario) -> Self {
        UsuarioPublico {
            id: usuario.id,
            name: usuario.name,
            email: usuario.email,
            role: Perfil::do_banco(&usuario.role),
        }
    }
}

/// Linha de leitura sem a coluna de senha.
#[derive(FromRow)]
pub struct UsuarioRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<UsuarioRow> for UsuarioPublico {
    fn from(row: UsuarioRow) -> Self {
        UsuarioPublico {
            id: row.id,
            name: row.name,
            email: row.email,
            role: Perfil::do_banco(&row.role),
        }
    }
}

/// Estrutura para receber dados de um usuário no cadastro ou na edição.
/// Na edição, senha ausente ou vazia mantém a atual.
#[derive(Deserialize)]
pub struct NovoUsuario {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub password: Option<String>, // Senha em texto claro (será hashed antes de salvar)
    #[serde(default)]
    pub role: Perfil,
}

impl NovoUsuario {
    pub fn validar(&self) -> Result<(), ApiError> {
        exigir_preenchido(&self.name, "Nome e Email são obrigatórios.")?;
        exigir_preenchido(&self.email, "Nome e Email são obrigatórios.")
    }

    /// Senha informada e não vazia.
    pub fn nova_senha(&self) -> Option<&str> {
        self.password.as_deref().filter(|s| !s.is_empty())
    }

    pub fn com_id(self, id: i32) -> UsuarioPublico {
        UsuarioPublico {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

/// Estrutura para receber dados de login do usuário.
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String, // Senha em texto claro
}

/// Resposta do login: o usuário sem senha, mais o token.
#[derive(Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub usuario: UsuarioPublico,
    pub token: String,
}

/// Estrutura para o payload do JWT (Claims).
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,      // Subject (ID do usuário)
    pub name: String,  // Nome do usuário
    pub email: String, // Email do usuário
    pub role: Perfil,
    pub exp: i64, // Expiration Time (timestamp Unix)
}

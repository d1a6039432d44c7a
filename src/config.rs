// src/config.rs

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Segredo usado quando JWT_SECRET não é definido. Serve apenas para desenvolvimento.
const JWT_SECRET_DESENVOLVIMENTO: &str = "minha_chave_secreta_para_testes_123";

/// Erros ao montar a configuração a partir das variáveis de ambiente.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("variável de ambiente {0} não definida")]
    Ausente(&'static str),

    #[error("valor inválido para {nome}: {valor}")]
    Invalida { nome: &'static str, valor: String },
}

/// Configuração da aplicação, lida do ambiente (e de um `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiracao_horas: i64,
    pub bcrypt_cost: u32,
    /// Quando verdadeiro, rotas administrativas exigem um token com perfil `admin`.
    pub exigir_perfil_admin: bool,
    pub popular_dados_iniciais: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Um .env ausente não é erro
        let _ = dotenvy::dotenv();

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Ausente("DATABASE_URL"))?;

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => {
                log::warn!("JWT_SECRET não definido, usando segredo de desenvolvimento");
                JWT_SECRET_DESENVOLVIMENTO.to_string()
            }
        };

        Ok(Config {
            database_url,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: ler_ou_padrao("PORT", 3001)?,
            db_max_connections: ler_ou_padrao("DB_MAX_CONNECTIONS", 5)?,
            jwt_secret,
            jwt_expiracao_horas: ler_ou_padrao("JWT_EXPIRACAO_HORAS", 8)?,
            bcrypt_cost: ler_ou_padrao("BCRYPT_COST", 10)?,
            exigir_perfil_admin: ler_ou_padrao("EXIGIR_PERFIL_ADMIN", false)?,
            popular_dados_iniciais: ler_ou_padrao("POPULAR_DADOS_INICIAIS", true)?,
        })
    }

    pub fn endereco(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn ler_ou_padrao<T: FromStr>(nome: &'static str, padrao: T) -> Result<T, ConfigError> {
    match env::var(nome) {
        Ok(valor) => converter(nome, &valor),
        Err(_) => Ok(padrao),
    }
}

fn converter<T: FromStr>(nome: &'static str, valor: &str) -> Result<T, ConfigError> {
    valor.trim().parse::<T>().map_err(|_| ConfigError::Invalida {
        nome,
        valor: valor.to_string(),
    })
}

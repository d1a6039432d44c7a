// src/main.rs

use actix_web::{get, middleware, web, App, HttpResponse, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

// Módulos de domínio
mod categorias;
mod clientes;
mod configuracoes;
mod produtos;
mod relatorios;
mod usuarios;
mod vendas;

mod config;
mod dados_iniciais;
mod shared;

#[cfg(test)]
mod testes;

use config::Config;
use shared::erros::ApiError;
use shared::shared_structs::SaudeResponse;

// Estado compartilhado entre as rotas: pool de conexões e configuração.
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Config,
}

#[get("/health")]
async fn verificar_saude(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    sqlx::query("SELECT 1").execute(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(SaudeResponse { status: "ok" }))
}

/// Registra todas as rotas sob `/api`. Usada pelo servidor e pelos testes.
pub fn configurar_rotas(cfg: &mut web::ServiceConfig) {
    // Corpo ou caminho malformado vira o mesmo `{ "error": ... }` 400 dos handlers
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Corpo JSON rejeitado: {}", err);
        ApiError::Validacao(format!("JSON inválido: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        log::warn!("Parâmetro de caminho rejeitado: {}", err);
        ApiError::Validacao("ID inválido.".to_string()).into()
    }));

    cfg.service(
        web::scope("/api")
            .service(verificar_saude)
            // Módulo de Categorias
            .service(categorias::categoria_router::buscar_categorias)
            .service(categorias::categoria_router::cadastrar_categoria)
            .service(categorias::categoria_router::atualizar_categoria)
            .service(categorias::categoria_router::deletar_categoria)
            // Módulo de Produtos
            .service(produtos::produtos_router::buscar_produtos)
            .service(produtos::produtos_router::buscar_produtos_estoque_baixo)
            .service(produtos::produtos_router::cadastrar_produto)
            .service(produtos::produtos_router::atualizar_produto)
            .service(produtos::produtos_router::deletar_produto)
            // Módulo de Clientes
            .service(clientes::clientes_router::buscar_clientes)
            .service(clientes::clientes_router::cadastrar_cliente)
            .service(clientes::clientes_router::atualizar_cliente)
            .service(clientes::clientes_router::deletar_cliente)
            // Módulo de Usuários (login antes de /users/{id})
            .service(usuarios::usuario_router::login_usuario)
            .service(usuarios::usuario_router::buscar_usuarios)
            .service(usuarios::usuario_router::cadastrar_usuario)
            .service(usuarios::usuario_router::atualizar_usuario)
            .service(usuarios::usuario_router::deletar_usuario)
            // Módulo de Vendas
            .service(vendas::vendas_router::buscar_vendas)
            .service(vendas::vendas_router::realizar_venda)
            .service(vendas::vendas_router::adicionar_item_carrinho)
            // Módulo de Configurações
            .service(configuracoes::configuracoes_router::buscar_dados_loja)
            .service(configuracoes::configuracoes_router::atualizar_dados_loja)
            // Módulo de Relatórios
            .service(relatorios::relatorios_router::resumo_vendas)
            .service(relatorios::relatorios_router::historico_financeiro),
    );
}

fn erro_de_inicializacao<E: std::fmt::Display>(contexto: &str, erro: E) -> std::io::Error {
    log::error!("{}: {}", contexto, erro);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", contexto, erro))
}

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| erro_de_inicializacao("Configuração inválida", e))?;

    // A coluna 'preco' é NUMERIC para mapear em bigdecimal::BigDecimal.
    let db_pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| erro_de_inicializacao("Falha ao conectar ao banco PostgreSQL", e))?;

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .map_err(|e| erro_de_inicializacao("Falha ao aplicar as migrações", e))?;

    if config.popular_dados_iniciais {
        dados_iniciais::popular_se_vazio(&db_pool, config.bcrypt_cost)
            .await
            .map_err(|e| erro_de_inicializacao("Falha ao gravar os dados iniciais", e))?;
    }

    let endereco = config.endereco();
    log::info!("Iniciando API da oficina em http://{}:{}/api", endereco.0, endereco.1);

    let app_state = web::Data::new(AppState { db_pool, config });

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configurar_rotas)
    })
    .bind(endereco)?
    .run()
    .await
}

// src/main.rs

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalogo_filmes::config::Config;
use catalogo_filmes::shared::erros::StartupError;
use catalogo_filmes::store::PgStore;
use catalogo_filmes::{configurar, cors, AppState};

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();

    // Logs do actix (crate `log`) chegam aqui pela ponte tracing-log.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalogo_filmes=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Conecta ao banco PostgreSQL usando um pool de conexões.
    let store = PgStore::conectar(&config.database_url, config.max_conexoes).await?;
    tracing::info!(max_conexoes = config.max_conexoes, "Pool de conexões criado");

    if config.executar_migracoes {
        store.migrar().await?;
        tracing::info!("Migrações aplicadas");
    }

    let app_state = web::Data::new(AppState::new(Arc::new(store)));

    tracing::info!(host = %config.host, porta = config.porta, "Servidor da API rodando");

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configurar)
    })
    .bind(config.endereco())?
    .run()
    .await?;

    Ok(())
}

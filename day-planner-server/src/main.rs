use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use day_planner_server::store::build_repository;
use day_planner_server::web::configure_app_routes;
use day_planner_server::{AppConfig, AppState};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Arc::new(AppConfig::from_env().context("Failed to load configuration")?);
    let repository = build_repository(&config).await?;
    let app_state = AppState::new(repository, config.clone());

    let address = config.server_address();
    tracing::info!(%address, "Starting day planner server");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(TracingLogger::default())
            .configure(configure_app_routes)
    })
    .bind(&address)
    .with_context(|| format!("Failed to bind {address}"))?
    .run()
    .await?;

    Ok(())
}

//! # Posts API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing::Instrument;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let telemetry = TelemetryConfig::from_env();
    telemetry::init_telemetry(&telemetry);

    run(AppConfig::from_env())
        .instrument(telemetry.service_span())
        .await
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!(
        "Starting Posts API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::from_config(&config).await?;
    let cors = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors.build())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

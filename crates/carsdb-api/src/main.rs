//! # carsdb-api — Binary Entry Point
//!
//! Starts the Axum HTTP server on the fixed port after connecting to
//! MongoDB. Startup fails fast on missing configuration or an
//! unreachable store.

use std::sync::Arc;

use carsdb_api::db::{self, MongoCarStore};
use carsdb_api::state::{AppConfig, AppState, PORT};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Невалідна конфігурація: {e}");
        e
    })?;

    // Open the long-lived store connection; `connect` verifies it with
    // a ping and logs the outcome.
    let client = db::connect(&config.connection_uri()).await?;

    let state = AppState::new(config, Arc::new(MongoCarStore::new(&client)));
    let app = carsdb_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Сервер слухає порт {PORT}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Graceful close of the store connection once the server stops.
    client.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "не вдалося встановити обробник сигналу завершення");
    }
}

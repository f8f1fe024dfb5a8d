//! Group AHP server binary.

use std::sync::Arc;

use group_ahp::adapters::http::{app_router, ModelsAppState};
use group_ahp::adapters::storage::InMemoryModelRepository;
use group_ahp::config::{AppConfig, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let state = ModelsAppState::new(
        Arc::new(InMemoryModelRepository::new()),
        config.engine.ranking_engine(),
    );
    let app = app_router(state, &config.server);

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        max_iterations = config.engine.max_iterations,
        "Starting group-ahp"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

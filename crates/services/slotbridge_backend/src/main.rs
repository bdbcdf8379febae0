// File: services/slotbridge_backend/src/main.rs
use slotbridge_backend::{build_app, AppState};
use slotbridge_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    slotbridge_common::logging::init();

    let config = match load_config() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("Failed to load config: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::from_config(config)?;
    let app = build_app(&state);

    let server = &state.config.server;
    let addr = format!("{}:{}", server.host, server.port);
    let listener = TcpListener::bind(&addr).await.inspect_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
    })?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

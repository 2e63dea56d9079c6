use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use shopfront::config::load_config;
use shopfront::infrastructure::{logger::Logger, store::Store};
use shopfront::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    let _log_guard = Logger::init(&config.logging)?;

    let store = match &config.storage.snapshot_path {
        Some(path) => Store::load_from_file(path)
            .with_context(|| format!("failed to load snapshot {}", path.display()))?,
        None => Store::new(),
    };
    let store = Arc::new(store);

    let state = AppState::new(store.clone(), &config);
    let app = create_router(state, &config.http);

    let listener = TcpListener::bind(config.http.socket_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.http.socket_addr()))?;
    info!("🚀 shopfront API running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(path) = &config.storage.snapshot_path {
        if let Err(e) = store.save_to_file(path) {
            error!("Failed to write snapshot {}: {}", path.display(), e);
        }
    }

    info!("shopfront API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

use anyhow::{Context, Result};
use tracing::info;

use gift_registry_api::{app, config::Config, middleware};
use persistence::RegistryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;

    middleware::logging::init_logging(&config.logging)
        .context("Failed to initialize logging")?;
    middleware::init_metrics().context("Failed to install Prometheus recorder")?;

    info!("Starting Gift Registry API v{}", env!("CARGO_PKG_VERSION"));

    if !config.security.admin_gate_enabled() {
        tracing::warn!("No admin key configured; admin routes are open");
    }

    // All data lives in memory and is lost on restart
    let store = RegistryStore::new();
    let addr = config.socket_addr().context("Invalid server address")?;
    let app = app::create_app(config, store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

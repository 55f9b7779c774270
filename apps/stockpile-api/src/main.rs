//! # Stockpile API
//!
//! HTTP server for the inventory tracker.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockpile API Server                             │
//! │                                                                         │
//! │  AppConfig::load ──► tracing ──► Database::new ──► InventoryService    │
//! │                                  (migrations)            │              │
//! │                                                          ▼              │
//! │  Client ───► HTTP (8080) ───► axum Router ───► SQLite                  │
//! │                                                                         │
//! │  Ctrl+C / SIGTERM ──► graceful shutdown ──► pool closed                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stockpile_api::{app, AppConfig, InventoryService};
use stockpile_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first: it carries the log filter
    let config = AppConfig::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting Stockpile API server...");
    info!(
        bind = %config.bind_address(),
        database = %config.database.path.display(),
        "Configuration loaded"
    );

    // Connect to database
    let db = Database::new(config.db_config())
        .await
        .context("failed to open database")?;

    let service = InventoryService::new(Arc::new(db.inventory()));
    let router = app(service, db.clone());

    // Start server
    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    info!(addr = %config.bind_address(), "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

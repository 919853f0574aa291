//! # Tally API
//!
//! HTTP server for receipt points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally API Server                                │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► Handlers ───► ReceiptStore               │
//! │                                   │          (in memory)                │
//! │                                   ▼                                     │
//! │                            tally-core rules                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use tally_api::{build_router, ApiConfig, AppState};
use tally_store::ReceiptStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tally_api::init_tracing();

    info!("Starting Tally API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.http_port,
        bind = %config.bind_addr,
        "Configuration loaded"
    );

    // Create shared state
    let state = AppState::new(ReceiptStore::new());

    // Build server address
    let addr: SocketAddr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Starting HTTP server");

    // Start server
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

//! # Tally API
//!
//! HTTP server exposing receipt intake and points lookup.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally API Layers                               │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  Routing       │  │  Handlers      │  │  State                     ││
//! │  │                │  │                │  │                            ││
//! │  │ • axum Router  │  │ • process      │  │ • AppState                 ││
//! │  │ • 4 routes     │  │ • list         │  │ • ReceiptStore handle      ││
//! │  │                │  │ • points       │  │   (shared, in memory)      ││
//! │  │                │  │ • health       │  │                            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Cross-cutting                                │  │
//! │  │                                                                   │  │
//! │  │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────┐│  │
//! │  │  │  config      │  │  error       │  │  tracing                 ││  │
//! │  │  │              │  │              │  │                          ││  │
//! │  │  │ BIND_ADDR    │  │ ApiError     │  │ request debug logs       ││  │
//! │  │  │ HTTP_PORT    │  │ ErrorCode    │  │ state-change info logs   ││  │
//! │  │  └──────────────┘  └──────────────┘  └──────────────────────────┘│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `BIND_ADDR` - listen address (default `127.0.0.1`)
//! - `HTTP_PORT` - listen port (default `8080`)
//! - `RUST_LOG` - log filter (default `info`, `debug` for the tally crates)

pub mod config;
pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use tally_store::ReceiptStore;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};

// =============================================================================
// Shared State
// =============================================================================

/// Shared application state, cloned into every handler.
///
/// Cloning is cheap: the store is a handle onto one shared collection.
#[derive(Clone)]
pub struct AppState {
    pub store: ReceiptStore,
}

impl AppState {
    /// Creates application state around a receipt store.
    pub fn new(store: ReceiptStore) -> Self {
        AppState { store }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Builds the router with every route the service exposes.
///
/// ```text
/// Method  Path                    Handler
/// ──────  ────                    ───────
/// POST    /receipts/process       routes::receipts::process_receipt
/// GET     /receipts               routes::receipts::list_receipts
/// GET     /receipts/{id}/points   routes::receipts::receipt_points
/// GET     /health                 routes::health
/// ```
///
/// Separated from serving so tests can drive the router directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/receipts/process",
            post(routes::receipts::process_receipt),
        )
        .route("/receipts", get(routes::receipts::list_receipts))
        .route(
            "/receipts/{id}/points",
            get(routes::receipts::receipt_points),
        )
        .route("/health", get(routes::health))
        .with_state(state)
}

// =============================================================================
// Tracing
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_api=trace` - Show trace for the API crate only
/// - Default: INFO level, with debug for the tally crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally_api=debug,tally_store=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

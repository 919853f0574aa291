//! # Route Handlers Module
//!
//! All HTTP handlers exposed by the Tally API.
//!
//! ## Handler Organization
//! ```text
//! routes/
//! ├── mod.rs      ◄─── You are here (exports + /health)
//! └── receipts.rs ◄─── Receipt intake, listing, scoring
//! ```
//!
//! ## How Handlers Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Flow                                     │
//! │                                                                         │
//! │  POST /receipts/process  {"retailer": "Target", ...}                    │
//! │         │                                                               │
//! │         │ (axum routing)                                                │
//! │         ▼                                                               │
//! │  async fn process_receipt(                                              │
//! │      State(state),            ◄── Shared AppState (store handle)        │
//! │      body: Result<Json<NewReceipt>, JsonRejection>,                     │
//! │  ) -> Result<…, ApiError>                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  201 {"id": "adb6b560-…"}   or   400 {"message": "…"}                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod receipts;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::AppState;

/// Liveness response for operators and probes.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub receipts: usize,
}

/// Reports process liveness and the current receipt count.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("health request");
    Json(HealthResponse {
        status: "ok",
        receipts: state.store.len(),
    })
}

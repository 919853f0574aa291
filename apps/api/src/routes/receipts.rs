//! # Receipt Handlers
//!
//! HTTP handlers for receipt intake, listing, and scoring.
//!
//! ## Receipt Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Lifecycle                                  │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │Submitted │────►│  Stored  │────►│  Scored  │                         │
//! │  │  (JSON)  │     │ (has id) │     │ (points) │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │       │                │                 │                              │
//! │  process_receipt   list_receipts    receipt_points                      │
//! │  (assigns uuid)    (whole store)    (runs the rules)                    │
//! │                                                                         │
//! │  Scoring is repeatable: the receipt is stored as submitted and the      │
//! │  rules run on every points request.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};

use tally_core::points::PointsBreakdown;
use tally_core::{NewReceipt, Receipt};

use crate::error::ApiError;
use crate::AppState;

/// Response for a successful receipt submission.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Response for a points lookup.
///
/// The count travels as a JSON *string* (`{"points": "28"}`), which is
/// what existing clients parse.
#[derive(Debug, Clone, Serialize)]
pub struct PointsResponse {
    pub points: String,
}

/// Accepts a submitted receipt and stores it.
///
/// ## Behavior
/// - Fields may be missing: they coerce to empty values and simply score
///   zero points later
/// - A body that is not valid JSON, or binds a field to the wrong type,
///   is rejected with `400` and a description of the problem
/// - Nothing else is validated; registration cannot fail
///
/// ## Returns
/// `201` with the store-assigned id:
/// ```json
/// { "id": "adb6b560-0eef-42bc-9d16-df48f30e89b2" }
/// ```
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Json<NewReceipt>, JsonRejection>,
) -> Result<(StatusCode, Json<ProcessReceiptResponse>), ApiError> {
    debug!("process_receipt request");

    let Json(new) = body.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    let id = state.store.register(new);
    info!(id = %id, receipts = state.store.len(), "Receipt registered");

    Ok((StatusCode::CREATED, Json(ProcessReceiptResponse { id })))
}

/// Returns every stored receipt, in registration order.
///
/// ## Returns
/// `200` with a JSON array of receipts, ids included. An empty store
/// yields `[]`.
pub async fn list_receipts(State(state): State<AppState>) -> Json<Vec<Receipt>> {
    debug!("list_receipts request");
    Json(state.store.list_all())
}

/// Scores a stored receipt.
///
/// ## Behavior
/// - Looks the receipt up by the path id
/// - Runs the seven scoring rules on the stored submission
/// - Unknown id: `404` with the exact body
///   `{"message": "Receipt not found!"}`
///
/// ## Returns
/// `200` with the total as a string:
/// ```json
/// { "points": "28" }
/// ```
pub async fn receipt_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    debug!(id = %id, "receipt_points request");

    let receipt = state
        .store
        .find_by_id(&id)
        .ok_or_else(|| ApiError::not_found("Receipt not found!"))?;

    let breakdown = PointsBreakdown::from(&receipt);
    debug!(id = %id, breakdown = ?breakdown, "Scored receipt");

    Ok(Json(PointsResponse {
        points: breakdown.total().to_string(),
    }))
}

//! # HTTP Routes
//!
//! The two operations of the service, as axum handlers.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │       │                                                                 │
//! │       ├── deserialize Receipt (malformed JSON → 400 from axum)         │
//! │       ├── validate(receipt, today)   → 400 with specific reason        │
//! │       ├── db.receipts().save()       → one transaction                 │
//! │       └── 201 {"id": "<uuid>"}                                         │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                             │
//! │       │                                                                 │
//! │       ├── Uuid::parse_str BEFORE any storage access → 400 on garbage   │
//! │       ├── db.receipts().find_by_id() → 404 when absent                 │
//! │       ├── score(receipt)             → recomputed every time           │
//! │       └── 200 {"points": <n>}                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use rewards_core::{score, validate, Receipt};
use rewards_db::Database;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Body of a successful submission.
#[derive(Debug, Serialize, Deserialize)]
struct ReceiptIdResponse {
    id: Uuid,
}

/// Body of a successful points lookup.
#[derive(Debug, Serialize, Deserialize)]
struct PointsResponse {
    points: u64,
}

/// POST /receipts/process
///
/// Validates the submitted receipt and stores it. Nothing is persisted for
/// an invalid receipt - validation runs strictly before the save.
async fn process_receipt(
    State(state): State<AppState>,
    Json(receipt): Json<Receipt>,
) -> Result<(StatusCode, Json<ReceiptIdResponse>), ApiError> {
    // The future-date rule compares against the processing date; the engine
    // itself never reads a clock.
    let today = Utc::now().date_naive();
    validate(&receipt, today)?;

    let id = state.db.receipts().save(&receipt).await?;
    info!(%id, retailer = %receipt.retailer, "Receipt accepted");

    Ok((StatusCode::CREATED, Json(ReceiptIdResponse { id })))
}

/// GET /receipts/{id}/points
///
/// Looks up a stored receipt and recomputes its score. Malformed identifier
/// text is rejected before storage is touched.
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::malformed_id(&id))?;

    let receipt = state
        .db
        .receipts()
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::receipt_not_found)?;

    let points = score(&receipt);
    info!(%id, points, "Points computed");

    Ok(Json(PointsResponse { points }))
}

// =============================================================================
// Router Tests
// =============================================================================

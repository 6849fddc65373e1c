//! Contact-intent click tracking route handler.

use axum::{Json, extract::State};
use rosemary_core::ProductId;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Track-click request body.
#[derive(Debug, Deserialize)]
pub struct TrackClickRequest {
    pub product_id: Option<ProductId>,
}

/// Record one contact-intent click.
///
/// Always responds success once the id parses: recording happens on a
/// background task and its outcome is deliberately not reported. The
/// counter is best-effort telemetry, not a transactional fact.
#[instrument(skip(state))]
pub async fn track(
    State(state): State<AppState>,
    Json(request): Json<TrackClickRequest>,
) -> Result<Json<serde_json::Value>> {
    let Some(product_id) = request.product_id else {
        return Err(AppError::BadRequest("Product ID required".to_string()));
    };

    state.clicks().record(product_id);

    Ok(Json(json!({ "success": true })))
}

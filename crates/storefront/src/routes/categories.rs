//! Category listing route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::catalog::types::CategoryRecord;
use crate::error::Result;
use crate::state::AppState;

/// Serve the category list for the shop's filter chips.
///
/// Rows come back in `sort_order`; the `id` of each row is what the
/// product listing accepts as its `category` query parameter.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<CategoryRecord>>> {
    let categories = state.catalog().categories().await?;
    Ok(Json(categories))
}

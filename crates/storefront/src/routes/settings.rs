//! Site settings route handler.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use tracing::{instrument, warn};

use crate::state::AppState;

/// Serve the flat site settings map.
///
/// Absent keys imply client-side defaults, so a store failure degrades to
/// an empty map rather than an error — the shopper never sees a settings
/// fetch fail.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<BTreeMap<String, serde_json::Value>> {
    match state.catalog().settings().await {
        Ok(map) => Json(map),
        Err(e) => {
            warn!(error = %e, "Settings fetch failed, serving empty map");
            Json(BTreeMap::new())
        }
    }
}

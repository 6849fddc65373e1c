//! General inquiry route handler.
//!
//! Backs the site-wide floating WhatsApp button: no product context, so the
//! composed text is the fixed generic inquiry sentence and no click signal
//! fires (the counter is per-product).

use axum::{Json, extract::State};
use tracing::instrument;

use crate::discovery::inquiry::{compose, whatsapp_link};
use crate::discovery::settings::resolve;
use crate::routes::products::InquiryResponse;
use crate::state::AppState;

/// Compose the general WhatsApp inquiry link.
#[instrument(skip(state))]
pub async fn inquire(State(state): State<AppState>) -> Json<InquiryResponse> {
    let site = state.catalog().site_settings().await;
    let resolved = resolve(Some(&site), None);

    let text = compose(&resolved.message_template, None, None, None);
    let link = whatsapp_link(&resolved.whatsapp_number, &text);

    Json(InquiryResponse { link, text })
}

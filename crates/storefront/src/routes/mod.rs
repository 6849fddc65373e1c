//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Health check
//!
//! # Products
//! GET  /api/products               - Product listing (?category=, ?featured=)
//! GET  /api/products/{id}          - Product detail (gallery order, spec lines)
//! POST /api/products/{id}/inquire  - Compose the WhatsApp inquiry link
//!
//! # Site
//! GET  /api/categories             - Category list (filter chips)
//! GET  /api/settings               - Flat site settings map
//! GET  /api/inquire                - General WhatsApp inquiry link
//! POST /api/track-click            - Record a contact-intent click
//! ```
//!
//! Page rendering happens on the client; this layer only serves data and
//! performs the inquiry handoff.

pub mod categories;
pub mod clicks;
pub mod contact;
pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/products", get(products::index))
        .route("/api/products/{id}", get(products::show))
        .route("/api/products/{id}/inquire", post(products::inquire))
        .route("/api/categories", get(categories::index))
        .route("/api/settings", get(settings::show))
        .route("/api/inquire", get(contact::inquire))
        .route("/api/track-click", post(clicks::track))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

//! Product route handlers.
//!
//! The listing and detail handlers translate raw catalog records into view
//! data with the discovery core applied: gallery ordering, effective price
//! visibility, and description spec lines. The inquire handler is the
//! contact trigger — it re-reads selection and settings at trigger time,
//! gates on variant availability, fires the click signal, and returns the
//! composed deep link.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rosemary_core::{CurrencyCode, Price, ProductId, StockStatus, VariantId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::ProductFilter;
use crate::catalog::types::{ProductRecord, SiteSettings, VariantRecord};
use crate::discovery::description::{SpecLine, split_description};
use crate::discovery::gallery::Gallery;
use crate::discovery::inquiry::{compose, whatsapp_link};
use crate::discovery::settings::resolve;
use crate::discovery::variants::SelectionState;
use crate::error::{AppError, Result};
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Product card data for the listing grid.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    /// Display price; `None` when price visibility resolves to hidden
    /// (the grid shows "Inquire" instead).
    pub price: Option<String>,
    pub image: Option<String>,
    /// Second distinct image, revealed on hover.
    pub hover_image: Option<String>,
    pub is_new: bool,
    pub is_featured: bool,
}

/// Full product data for the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub price: Option<String>,
    /// Gallery-ordered images: primary first, de-duplicated. Empty when the
    /// product has no images at all (the client renders a placeholder).
    pub images: Vec<String>,
    pub description: String,
    pub spec_lines: Vec<SpecLineView>,
    pub is_new: bool,
    pub variants: Vec<VariantView>,
}

/// A `label: value` pair extracted from the description.
#[derive(Debug, Clone, Serialize)]
pub struct SpecLineView {
    pub label: String,
    pub value: String,
}

/// Variant display data.
#[derive(Debug, Clone, Serialize)]
pub struct VariantView {
    pub id: VariantId,
    pub size: String,
    pub color: String,
    pub stock_status: StockStatus,
    /// Whether the shopper may pick this variant (false only for sold-out).
    pub selectable: bool,
}

impl ProductSummary {
    fn from_record(record: &ProductRecord, site: &SiteSettings) -> Self {
        let gallery = Gallery::new(record.image_url.as_deref(), &record.images);
        let image = gallery.has_images().then(|| gallery.active_image().to_string());
        let hover_image = gallery.images().get(1).cloned();

        Self {
            id: record.id,
            name: record.name.clone(),
            price: display_price(record, site),
            image,
            hover_image,
            is_new: record.is_new,
            is_featured: record.is_featured,
        }
    }
}

impl ProductDetail {
    fn from_record(record: &ProductRecord, site: &SiteSettings) -> Self {
        let gallery = Gallery::new(record.image_url.as_deref(), &record.images);
        let images = if gallery.has_images() {
            gallery.images().to_vec()
        } else {
            Vec::new()
        };
        let (description, spec_lines) = split_description(&record.description);

        Self {
            id: record.id,
            name: record.name.clone(),
            price: display_price(record, site),
            images,
            description,
            spec_lines: spec_lines
                .into_iter()
                .map(|SpecLine { label, value }| SpecLineView { label, value })
                .collect(),
            is_new: record.is_new,
            variants: record
                .product_variants
                .iter()
                .map(|v| VariantView {
                    id: v.id,
                    size: v.size.clone(),
                    color: v.color.clone(),
                    stock_status: v.stock_status,
                    selectable: v.stock_status.is_selectable(),
                })
                .collect(),
        }
    }
}

/// Render the display price iff effective visibility allows it.
fn display_price(record: &ProductRecord, site: &SiteSettings) -> Option<String> {
    let resolved = resolve(Some(site), record.show_price);
    resolved.show_price.then(|| {
        let currency = CurrencyCode::from_code(&record.currency).unwrap_or_default();
        Price::new(record.price, currency).display()
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// List products for the shop grid.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<ProductSummary>>> {
    let site = state.catalog().site_settings().await;
    let filter = ProductFilter {
        category: query.category,
        featured: query.featured,
    };
    let records = state.catalog().products(&filter).await?;

    let summaries = records
        .iter()
        .map(|record| ProductSummary::from_record(record, &site))
        .collect();
    Ok(Json(summaries))
}

/// Show a single product.
#[instrument(skip(state), fields(product_id = %product_id))]
pub async fn show(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<ProductDetail>> {
    let site = state.catalog().site_settings().await;
    let record = state.catalog().product(product_id).await?;
    Ok(Json(ProductDetail::from_record(&record, &site)))
}

/// Inquiry request body.
#[derive(Debug, Deserialize)]
pub struct InquiryRequest {
    /// Required when the product has variants.
    pub variant_id: Option<VariantId>,
    /// The page the shopper is on, substituted for `{url}` in the template.
    pub page_url: Option<String>,
}

/// Inquiry response: the deep link to hand off to, plus the plain text.
#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub link: String,
    pub text: String,
}

/// Compose the WhatsApp inquiry for a product.
///
/// Selection and settings are both re-read here, at trigger time, never
/// from an earlier snapshot. The click signal fires before the response
/// and is not awaited.
#[instrument(skip(state), fields(product_id = %product_id))]
pub async fn inquire(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    Json(request): Json<InquiryRequest>,
) -> Result<Json<InquiryResponse>> {
    let record = state.catalog().product(product_id).await?;

    let mut selection = SelectionState::new(&record.product_variants);
    if let Some(variant_id) = request.variant_id {
        let variant = record
            .product_variants
            .iter()
            .find(|v| v.id == variant_id)
            .ok_or_else(|| AppError::BadRequest(format!("unknown variant: {variant_id}")))?;
        if !selection.select(variant) {
            return Err(AppError::Conflict("that option is sold out".to_string()));
        }
    }

    if !selection.can_contact() {
        let message = if selection.any_selectable() {
            "select a size and color first"
        } else {
            "no option is currently available"
        };
        return Err(AppError::Conflict(message.to_string()));
    }

    // Settings are resolved fresh at the moment of contact.
    let site = state.catalog().site_settings().await;
    let resolved = resolve(Some(&site), record.show_price);

    let page_url = request.page_url.unwrap_or_else(|| {
        format!(
            "{}/shop/{}",
            state.config().base_url.trim_end_matches('/'),
            record.id
        )
    });
    let descriptor = selection.selected().map(VariantRecord::descriptor);
    let text = compose(
        &resolved.message_template,
        Some(&record.name),
        descriptor.as_deref(),
        Some(&page_url),
    );

    // Fire-and-forget: the handoff never waits on telemetry.
    state.clicks().record(record.id);

    let link = whatsapp_link(&resolved.whatsapp_number, &text);
    Ok(Json(InquiryResponse { link, text }))
}

//! Record types for the hosted catalog store.
//!
//! These mirror the rows the store returns over its REST interface. The
//! storefront is a read-only consumer apart from the click counter, so the
//! shapes are intentionally loose: absent columns decode to defaults rather
//! than failing the whole page.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rosemary_core::{CategoryId, ProductId, StockStatus, VariantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Product Records
// =============================================================================

/// A product row, with its variants embedded by the store query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    /// Base price in the shop currency's standard unit.
    pub price: Decimal,
    /// ISO 4217 code; absent rows default to the shop currency.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Designated primary image. May be absent for draft products.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Additional image references, unordered relative to the primary.
    #[serde(default)]
    pub images: Vec<String>,
    /// Free text; may embed `label: value` spec lines.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
    /// Per-product price visibility override. Absent means visible.
    #[serde(default)]
    pub show_price: Option<bool>,
    /// Best-effort contact-intent counter. Null until the first click.
    #[serde(default)]
    pub whatsapp_clicks: Option<i64>,
    /// Row creation time; listings are ordered by it store-side.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub product_variants: Vec<VariantRecord>,
}

/// A purchasable size/color combination with its own stock state.
///
/// (product, size, color) pairs are unique in practice but not enforced;
/// duplicates decode fine and stay independently selectable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantRecord {
    pub id: VariantId,
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
    #[serde(default)]
    pub stock_status: StockStatus,
}

impl VariantRecord {
    /// Human-readable descriptor used in inquiry messages, e.g. `"M - Red"`.
    #[must_use]
    pub fn descriptor(&self) -> String {
        format!("{} - {}", self.size, self.color)
    }
}

/// A category row, consumed read-only for the shop's filter chips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_currency() -> String {
    "LKR".to_string()
}

// =============================================================================
// Settings Records
// =============================================================================

/// A single `site_settings` row. The store keeps settings as key/value pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRow {
    pub key: String,
    pub value: serde_json::Value,
}

/// Flatten settings rows into the key->value map the public endpoint serves.
#[must_use]
pub fn settings_map(rows: Vec<SettingsRow>) -> BTreeMap<String, serde_json::Value> {
    rows.into_iter().map(|row| (row.key, row.value)).collect()
}

/// The typed subset of site settings the discovery core interprets.
///
/// Unknown keys pass through the flat map untouched (`philosophy_image`,
/// `brand_tagline`, SEO entries); only these three drive behavior here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettings {
    /// Site-wide price visibility flag. Absent means visible.
    pub show_prices_global: Option<bool>,
    /// WhatsApp contact number, digits only.
    pub whatsapp_number: Option<String>,
    /// Inquiry message template with `{product_name}` etc. placeholders.
    pub whatsapp_template: Option<String>,
}

impl SiteSettings {
    /// Pick the known keys out of a flat settings map.
    ///
    /// Values of the wrong JSON type are treated as absent, matching the
    /// "absent keys imply defaults" contract of the settings endpoint.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, serde_json::Value>) -> Self {
        Self {
            show_prices_global: map.get("show_prices_global").and_then(as_bool),
            whatsapp_number: map.get("whatsapp_number").and_then(as_string),
            whatsapp_template: map.get("whatsapp_template").and_then(as_string),
        }
    }
}

/// Accept both native booleans and the `"true"`/`"false"` strings the admin
/// console historically wrote.
fn as_bool(value: &serde_json::Value) -> Option<bool> {
    match value {
        serde_json::Value::Bool(b) => Some(*b),
        serde_json::Value::String(s) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn as_string(value: &serde_json::Value) -> Option<String> {
    value.as_str().map(ToString::to_string)
}

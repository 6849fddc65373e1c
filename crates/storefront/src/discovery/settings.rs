//! Effective settings resolution.
//!
//! Merges the site-wide settings record with a product's own visibility
//! override. Pure function of its inputs: the store fetch, caching, and
//! staleness policy all live with the caller.

use crate::catalog::types::SiteSettings;

/// Fallback contact number when no settings row exists.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "94771234567";

/// Fallback inquiry template when no settings row exists.
pub const DEFAULT_TEMPLATE: &str = "Hi, I am interested in {product_name}.";

/// The settings a product view actually acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Final show/hide price decision for this product.
    pub show_price: bool,
    /// Contact number, digits only (admin-validated, not checked here).
    pub whatsapp_number: String,
    /// Inquiry message template with `{product_name}` etc. placeholders.
    pub message_template: String,
}

/// Resolve effective settings for one product.
///
/// Price is hidden iff either the product override or the site-wide flag is
/// explicitly `false`; an absent flag on either side means visible. Number
/// and template fall back to built-in defaults when the settings record is
/// missing entirely or leaves them unset/empty.
#[must_use]
pub fn resolve(site: Option<&SiteSettings>, product_override: Option<bool>) -> ResolvedSettings {
    let site_flag = site.and_then(|s| s.show_prices_global);
    let show_price = product_override != Some(false) && site_flag != Some(false);

    let whatsapp_number = site
        .and_then(|s| s.whatsapp_number.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_WHATSAPP_NUMBER)
        .to_string();

    let message_template = site
        .and_then(|s| s.whatsapp_template.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TEMPLATE)
        .to_string();

    ResolvedSettings {
        show_price,
        whatsapp_number,
        message_template,
    }
}

//! Inquiry message composition and the WhatsApp deep link.
//!
//! `compose` is pure text assembly; percent-encoding happens only at the
//! deep-link boundary in [`whatsapp_link`].

/// Fixed sentence used when no product context is available.
pub const GENERIC_INQUIRY: &str = "Hi, I'd like to know more about your collection at Rosemary.";

/// Build the outbound message text.
///
/// With a product name, performs literal substitution of `{product_name}`,
/// `{variant}`, and `{url}` in the template (first occurrence of each only;
/// absent arguments substitute the empty string; unrecognized placeholder
/// syntax is left untouched) and then normalizes whitespace. Without one,
/// the template is ignored and the fixed generic inquiry sentence is
/// returned.
///
/// Note an empty `{variant}` inside parentheses yields `"... ()"` after
/// normalization: surrounding whitespace collapses but the empty parens
/// stay. That is the documented behavior, not a bug.
#[must_use]
pub fn compose(
    template: &str,
    product_name: Option<&str>,
    variant: Option<&str>,
    page_url: Option<&str>,
) -> String {
    let Some(product_name) = product_name else {
        return GENERIC_INQUIRY.to_string();
    };

    let text = template
        .replacen("{product_name}", product_name, 1)
        .replacen("{variant}", variant.unwrap_or(""), 1)
        .replacen("{url}", page_url.unwrap_or(""), 1);

    normalize_whitespace(&text)
}

/// Collapse whitespace runs to single spaces and trim the ends.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the `wa.me` deep link for a composed message.
///
/// `number` is expected to be digits only (no leading `+` or separators);
/// validating it is an admin concern, not done here. The message text is
/// percent-encoded at this boundary.
#[must_use]
pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::settings::DEFAULT_TEMPLATE;

    #[test]
    fn test_compose_substitutes_all_placeholders() {
        let text = compose(
            "Hi, interested in {product_name} ({variant}) seen at {url}",
            Some("Silk Dress"),
            Some("M - Red"),
            Some("https://rosemary.lk/shop/rs-001"),
        );
        assert_eq!(
            text,
            "Hi, interested in Silk Dress (M - Red) seen at https://rosemary.lk/shop/rs-001"
        );
    }

    #[test]
    fn test_compose_without_product_name_uses_generic_sentence() {
        let text = compose(DEFAULT_TEMPLATE, None, Some("M - Red"), None);
        assert_eq!(text, GENERIC_INQUIRY);
    }

    #[test]
    fn test_compose_absent_variant_leaves_empty_parens() {
        let text = compose(
            "Hi, interested in {product_name} ({variant})",
            Some("Silk Dress"),
            None,
            None,
        );
        // Surrounding whitespace collapses; the empty parens are expected.
        assert_eq!(text, "Hi, interested in Silk Dress ()");
    }

    #[test]
    fn test_compose_substitutes_first_occurrence_only() {
        let text = compose(
            "{product_name}! Yes, {product_name}.",
            Some("Silk Dress"),
            None,
            None,
        );
        assert_eq!(text, "Silk Dress! Yes, {product_name}.");
    }

    #[test]
    fn test_compose_leaves_unknown_placeholders_untouched() {
        let text = compose("{product_name} {color}", Some("Silk Dress"), None, None);
        assert_eq!(text, "Silk Dress {color}");
    }

    #[test]
    fn test_compose_collapses_whitespace_runs() {
        let text = compose(
            "Hi,   interested\tin {product_name} \n {variant}",
            Some("Silk Dress"),
            None,
            None,
        );
        assert_eq!(text, "Hi, interested in Silk Dress");
    }

    #[test]
    fn test_normalize_whitespace_is_idempotent() {
        let once = normalize_whitespace("  a   b \t c  ");
        let twice = normalize_whitespace(&once);
        assert_eq!(once, "a b c");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose(DEFAULT_TEMPLATE, Some("Silk Dress"), Some("M - Red"), None);
        let b = compose(DEFAULT_TEMPLATE, Some("Silk Dress"), Some("M - Red"), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_whatsapp_link_percent_encodes_text() {
        let link = whatsapp_link("94771234567", "Hi, interested in Silk Dress (M - Red)");
        assert_eq!(
            link,
            "https://wa.me/94771234567?text=Hi%2C%20interested%20in%20Silk%20Dress%20%28M%20-%20Red%29"
        );
    }
}

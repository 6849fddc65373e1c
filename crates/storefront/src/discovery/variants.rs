//! Variant availability and contact gating.
//!
//! A product with variants requires an explicit selection before the
//! WhatsApp handoff is allowed; a product without variants is always
//! contactable. Selection starts empty on every view open and only an
//! in-stock or low-stock variant can become selected.

use crate::catalog::types::VariantRecord;

/// Per-view variant selection state.
///
/// Borrows the product's variant list; the catalog record outlives the view.
/// Duplicate (size, color) pairs are tolerated and independently selectable.
#[derive(Debug, Clone)]
pub struct SelectionState<'a> {
    variants: &'a [VariantRecord],
    selected: Option<&'a VariantRecord>,
}

impl<'a> SelectionState<'a> {
    /// Open a fresh view: nothing selected.
    #[must_use]
    pub const fn new(variants: &'a [VariantRecord]) -> Self {
        Self {
            variants,
            selected: None,
        }
    }

    /// Whether this product has any variants at all.
    #[must_use]
    pub const fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Whether a shopper may select this variant. False only for sold-out.
    #[must_use]
    pub const fn is_selectable(variant: &VariantRecord) -> bool {
        variant.stock_status.is_selectable()
    }

    /// Whether any variant can still be selected.
    ///
    /// When this is false on a product that has variants, the UI surfaces
    /// "no option is currently available" rather than permitting contact.
    #[must_use]
    pub fn any_selectable(&self) -> bool {
        self.variants.iter().any(Self::is_selectable)
    }

    /// Attempt to select a variant. Sold-out variants are refused and the
    /// previous selection is kept. Returns whether the selection applied.
    pub fn select(&mut self, variant: &'a VariantRecord) -> bool {
        if Self::is_selectable(variant) {
            self.selected = Some(variant);
            true
        } else {
            false
        }
    }

    /// Clear the selection (e.g., the shopper closed and reopened the view).
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The currently selected variant, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&'a VariantRecord> {
        self.selected
    }

    /// Whether the contact action is permitted right now.
    ///
    /// True when no variants exist (no selection required), otherwise only
    /// when a non-sold-out variant has been explicitly selected. With every
    /// variant sold out this stays false for every possible selection.
    #[must_use]
    pub const fn can_contact(&self) -> bool {
        if self.variants.is_empty() {
            true
        } else {
            self.selected.is_some()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosemary_core::{ProductId, StockStatus, VariantId};

    fn variant(size: &str, color: &str, stock_status: StockStatus) -> VariantRecord {
        VariantRecord {
            id: VariantId::generate(),
            product_id: ProductId::generate(),
            size: size.to_string(),
            color: color.to_string(),
            stock_status,
        }
    }

    #[test]
    fn test_no_variants_means_always_contactable() {
        let state = SelectionState::new(&[]);
        assert!(!state.has_variants());
        assert!(state.can_contact());
    }

    #[test]
    fn test_variants_require_explicit_selection() {
        let variants = vec![
            variant("S", "Red", StockStatus::SoldOut),
            variant("M", "Red", StockStatus::InStock),
        ];
        let mut state = SelectionState::new(&variants);

        assert!(state.has_variants());
        assert!(!state.can_contact());

        let m_red = variants.get(1).expect("fixture");
        assert!(state.select(m_red));
        assert!(state.can_contact());
        assert_eq!(state.selected().map(VariantRecord::descriptor).as_deref(), Some("M - Red"));
    }

    #[test]
    fn test_sold_out_variant_cannot_be_selected() {
        let variants = vec![
            variant("S", "Red", StockStatus::SoldOut),
            variant("M", "Red", StockStatus::InStock),
        ];
        let mut state = SelectionState::new(&variants);

        let sold_out = variants.first().expect("fixture");
        assert!(!state.select(sold_out));
        assert!(state.selected().is_none());
        assert!(!state.can_contact());
    }

    #[test]
    fn test_failed_select_keeps_previous_selection() {
        let variants = vec![
            variant("M", "Red", StockStatus::LowStock),
            variant("L", "Red", StockStatus::SoldOut),
        ];
        let mut state = SelectionState::new(&variants);

        let m_red = variants.first().expect("fixture");
        let l_red = variants.get(1).expect("fixture");
        assert!(state.select(m_red));
        assert!(!state.select(l_red));
        assert_eq!(state.selected().map(|v| v.size.as_str()), Some("M"));
    }

    #[test]
    fn test_all_sold_out_blocks_contact_entirely() {
        let variants = vec![
            variant("S", "Red", StockStatus::SoldOut),
            variant("M", "Blue", StockStatus::SoldOut),
        ];
        let mut state = SelectionState::new(&variants);

        assert!(!state.any_selectable());
        for v in &variants {
            assert!(!state.select(v));
        }
        assert!(!state.can_contact());
    }

    #[test]
    fn test_duplicate_pairs_are_independently_selectable() {
        let variants = vec![
            variant("M", "Red", StockStatus::InStock),
            variant("M", "Red", StockStatus::SoldOut),
        ];
        let mut state = SelectionState::new(&variants);

        // Same (size, color) pair, different rows: only the in-stock one takes.
        assert!(state.select(variants.first().expect("fixture")));
        assert!(!state.select(variants.get(1).expect("fixture")));
        assert!(state.can_contact());
    }

    #[test]
    fn test_clear_resets_to_view_open_state() {
        let variants = vec![variant("M", "Red", StockStatus::InStock)];
        let mut state = SelectionState::new(&variants);

        assert!(state.select(variants.first().expect("fixture")));
        state.clear();
        assert!(state.selected().is_none());
        assert!(!state.can_contact());
    }

    #[test]
    fn test_low_stock_is_selectable() {
        let variants = vec![variant("M", "Red", StockStatus::LowStock)];
        let mut state = SelectionState::new(&variants);
        assert!(state.select(variants.first().expect("fixture")));
    }
}

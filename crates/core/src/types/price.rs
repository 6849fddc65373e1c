//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupees, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display, using the currency's customary precision.
    ///
    /// LKR prices are shown without minor units (the catalog prices whole
    /// rupees); everything else gets two decimal places.
    #[must_use]
    pub fn display(&self) -> String {
        let places = self.currency_code.decimal_places();
        format!("{} {:.*}", self.currency_code.code(), places, self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    LKR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// The ISO 4217 code string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::LKR => "LKR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }

    /// Parse an ISO 4217 code string; `None` for unsupported currencies.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "LKR" => Some(Self::LKR),
            "USD" => Some(Self::USD),
            "EUR" => Some(Self::EUR),
            "GBP" => Some(Self::GBP),
            _ => None,
        }
    }

    /// Customary number of minor-unit digits when displaying.
    #[must_use]
    pub const fn decimal_places(self) -> usize {
        match self {
            Self::LKR => 0,
            Self::USD | Self::EUR | Self::GBP => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lkr_drops_minor_units() {
        let price = Price::new(Decimal::new(12500, 0), CurrencyCode::LKR);
        assert_eq!(price.display(), "LKR 12500");
    }

    #[test]
    fn test_display_usd_keeps_cents() {
        let price = Price::new(Decimal::new(199, 1), CurrencyCode::USD);
        assert_eq!(price.display(), "USD 19.90");
    }
}

//! Status enums for catalog entities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unknown stock status label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid stock status: {0}")]
pub struct ParseStockStatusError(String);

/// Stock state of a product variant.
///
/// The catalog carries a three-state label rather than a quantity: staff
/// flip variants between these states by hand, and the storefront only
/// needs to know whether a variant can still be inquired about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    SoldOut,
}

impl StockStatus {
    /// Whether a shopper may still select this variant.
    ///
    /// Low stock remains selectable; only sold-out variants are off limits.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::SoldOut)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => write!(f, "in_stock"),
            Self::LowStock => write!(f, "low_stock"),
            Self::SoldOut => write!(f, "sold_out"),
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = ParseStockStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_stock" => Ok(Self::InStock),
            "low_stock" => Ok(Self::LowStock),
            "sold_out" => Ok(Self::SoldOut),
            _ => Err(ParseStockStatusError(s.to_string())),
        }
    }
}

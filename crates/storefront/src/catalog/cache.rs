//! Cache types for catalog store responses.

use std::collections::BTreeMap;

use crate::catalog::types::{CategoryRecord, ProductRecord};

/// Cache key for catalog reads.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Product(String),
    Products {
        category: Option<String>,
        featured: Option<bool>,
    },
    Categories,
    Settings,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<ProductRecord>),
    Products(Vec<ProductRecord>),
    Categories(Vec<CategoryRecord>),
    Settings(BTreeMap<String, serde_json::Value>),
}

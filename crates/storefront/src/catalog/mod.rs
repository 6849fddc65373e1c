//! Catalog store client.
//!
//! The catalog lives in a hosted document store with a PostgREST-style
//! interface: rows come back as JSON arrays, embedded relations ride along
//! via `select=*,product_variants(*)`, and the one write this storefront
//! performs (the click counter) goes through an `increment_clicks` RPC with
//! a read-modify-write fallback.
//!
//! Products and settings are cached with `moka` (5-minute TTL).

mod cache;
pub mod types;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use rosemary_core::ProductId;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::CatalogConfig;
use crate::services::clicks::ClickSink;

use cache::{CacheKey, CacheValue};
use types::{CategoryRecord, ProductRecord, SettingsRow, SiteSettings, settings_map};

/// Errors that can occur when talking to the catalog store.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Store returned an error response.
    #[error("Store error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Row not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Filters for the product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Restrict to a category (store-side `category_id=eq.` filter).
    pub category: Option<String>,
    /// Restrict to featured products (home page sections).
    pub featured: Option<bool>,
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the hosted catalog store.
///
/// Reads use the anonymous key; the counter write path uses the service key.
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    rest_url: String,
    anon_key: String,
    service_key: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog store client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        let rest_url = format!("{}/rest/v1", config.url.trim_end_matches('/'));

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                rest_url,
                anon_key: config.anon_key.clone(),
                service_key: config.service_key.expose_secret().to_string(),
                cache,
            }),
        }
    }

    /// Execute a read against the store and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path_and_query}", self.inner.rest_url);

        let response = self
            .inner
            .client
            .get(&url)
            .header("apikey", &self.inner.anon_key)
            .bearer_auth(&self.inner.anon_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// List products with their embedded variants.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    #[instrument(skip(self))]
    pub async fn products(&self, filter: &ProductFilter) -> Result<Vec<ProductRecord>, CatalogError> {
        let cache_key = CacheKey::Products {
            category: filter.category.clone(),
            featured: filter.featured,
        };

        // Check cache
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product listing");
            return Ok(products);
        }

        let mut query = "products?select=*,product_variants(*)&order=created_at".to_string();
        if let Some(category) = &filter.category {
            query.push_str(&format!("&category_id=eq.{category}"));
        }
        if let Some(featured) = filter.featured {
            query.push_str(&format!("&is_featured=eq.{featured}"));
        }

        let products: Vec<ProductRecord> = self.get_json(&query).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get a single product by ID, variants embedded.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for an unknown ID, or any store error.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product(&self, product_id: ProductId) -> Result<ProductRecord, CatalogError> {
        let cache_key = CacheKey::Product(product_id.to_string());

        // Check cache
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let query = format!("products?select=*,product_variants(*)&id=eq.{product_id}");
        let rows: Vec<ProductRecord> = self.get_json(&query).await?;

        let product = rows.into_iter().next().ok_or_else(|| {
            CatalogError::NotFound(format!("Product not found: {product_id}"))
        })?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    // =========================================================================
    // Category Methods
    // =========================================================================

    /// List categories for the shop filter chips.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<CategoryRecord>, CatalogError> {
        // Check cache
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let categories: Vec<CategoryRecord> =
            self.get_json("categories?select=*&order=sort_order").await?;

        self.inner
            .cache
            .insert(CacheKey::Categories, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    // =========================================================================
    // Settings Methods
    // =========================================================================

    /// Fetch the flat site settings map.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    #[instrument(skip(self))]
    pub async fn settings(&self) -> Result<BTreeMap<String, serde_json::Value>, CatalogError> {
        // Check cache
        if let Some(CacheValue::Settings(map)) = self.inner.cache.get(&CacheKey::Settings).await {
            debug!("Cache hit for settings");
            return Ok(map);
        }

        let rows: Vec<SettingsRow> = self.get_json("site_settings?select=key,value").await?;
        let map = settings_map(rows);

        self.inner
            .cache
            .insert(CacheKey::Settings, CacheValue::Settings(map.clone()))
            .await;

        Ok(map)
    }

    /// Fetch the typed site settings, degrading to defaults on failure.
    ///
    /// The shopper never sees a settings error: a missing row, a network
    /// failure, or a malformed value all resolve to the built-in defaults.
    pub async fn site_settings(&self) -> SiteSettings {
        match self.settings().await {
            Ok(map) => SiteSettings::from_map(&map),
            Err(e) => {
                warn!(error = %e, "Settings fetch failed, using defaults");
                SiteSettings::default()
            }
        }
    }

    // =========================================================================
    // Click Counter (write path)
    // =========================================================================

    /// Execute a write against the store with the service key.
    async fn send_write(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, CatalogError> {
        let response = request
            .header("apikey", &self.inner.service_key)
            .bearer_auth(&self.inner.service_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

impl ClickSink for CatalogClient {
    /// Atomic server-side increment via the `increment_clicks` RPC.
    async fn increment_atomic(&self, product_id: ProductId) -> Result<(), CatalogError> {
        let url = format!("{}/rpc/increment_clicks", self.inner.rest_url);
        let body = serde_json::json!({ "row_id": product_id });

        self.send_write(self.inner.client.post(&url).json(&body))
            .await?;
        Ok(())
    }

    /// Read the current counter value (fallback path).
    async fn read_clicks(&self, product_id: ProductId) -> Result<i64, CatalogError> {
        #[derive(serde::Deserialize)]
        struct ClicksRow {
            whatsapp_clicks: Option<i64>,
        }

        let query = format!("products?select=whatsapp_clicks&id=eq.{product_id}");
        let rows: Vec<ClicksRow> = self.get_json(&query).await?;

        rows.into_iter()
            .next()
            .map(|row| row.whatsapp_clicks.unwrap_or(0))
            .ok_or_else(|| CatalogError::NotFound(format!("Product not found: {product_id}")))
    }

    /// Write the counter back (fallback path).
    async fn write_clicks(&self, product_id: ProductId, value: i64) -> Result<(), CatalogError> {
        let url = format!(
            "{}/products?id=eq.{product_id}",
            self.inner.rest_url
        );
        let body = serde_json::json!({ "whatsapp_clicks": value });

        self.send_write(
            self.inner
                .client
                .patch(&url)
                .header("Prefer", "return=minimal")
                .json(&body),
        )
        .await?;
        Ok(())
    }
}

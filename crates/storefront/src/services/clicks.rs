//! Interest signal recorder.
//!
//! Records a best-effort "contact intent" counter per product. The recorder
//! is fire-and-forget from the shopper's perspective: the actual store
//! round-trips run on a spawned task whose outcome is logged, never
//! surfaced. A failed recording costs one telemetry tick, nothing more.

use std::future::Future;

use rosemary_core::ProductId;
use tracing::{debug, warn};

use crate::catalog::{CatalogClient, CatalogError};

/// The store operations the increment protocol needs.
///
/// Split out from [`CatalogClient`] so the protocol is testable against an
/// in-memory sink.
pub trait ClickSink {
    /// Atomic server-side increment (preferred path).
    fn increment_atomic(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<(), CatalogError>> + Send;

    /// Read the current counter value (fallback path).
    fn read_clicks(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<i64, CatalogError>> + Send;

    /// Write the counter back (fallback path).
    fn write_clicks(
        &self,
        product_id: ProductId,
        value: i64,
    ) -> impl Future<Output = Result<(), CatalogError>> + Send;
}

/// Run the increment protocol against a sink.
///
/// Tries the atomic increment first. If that path is unavailable or errors,
/// falls back to read-add-write. The fallback is not concurrency-safe:
/// concurrent fallback invocations for the same product can lose updates.
/// That weakness is accepted — this counter is telemetry, not a
/// transactional business fact.
///
/// # Errors
///
/// Returns the fallback path's error when both paths fail.
pub async fn record_with<S: ClickSink + Sync>(
    sink: &S,
    product_id: ProductId,
) -> Result<(), CatalogError> {
    match sink.increment_atomic(product_id).await {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!(%product_id, error = %e, "Atomic increment unavailable, using fallback");
            let current = sink.read_clicks(product_id).await?;
            sink.write_clicks(product_id, current + 1).await
        }
    }
}

/// Fire-and-forget click recorder bound to the catalog store.
#[derive(Clone)]
pub struct ClickRecorder {
    catalog: CatalogClient,
}

impl ClickRecorder {
    /// Create a recorder writing through the given catalog client.
    #[must_use]
    pub const fn new(catalog: CatalogClient) -> Self {
        Self { catalog }
    }

    /// Record one contact-intent click for a product.
    ///
    /// Returns immediately; the increment happens on a background task.
    /// Failure of both increment paths is swallowed with a warning — the
    /// shopper's contact action must never block or fail on telemetry.
    pub fn record(&self, product_id: ProductId) {
        let catalog = self.catalog.clone();
        tokio::spawn(async move {
            if let Err(e) = record_with(&catalog, product_id).await {
                warn!(%product_id, error = %e, "Click signal dropped");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory sink with switchable failure modes.
    #[derive(Default)]
    struct MemorySink {
        atomic_available: bool,
        fallback_available: bool,
        counter: Mutex<i64>,
        atomic_calls: Mutex<u32>,
        write_calls: Mutex<u32>,
    }

    impl MemorySink {
        fn counter(&self) -> i64 {
            *self.counter.lock().expect("lock")
        }
    }

    fn unavailable() -> CatalogError {
        CatalogError::Api {
            status: 404,
            message: "function not found".to_string(),
        }
    }

    impl ClickSink for MemorySink {
        async fn increment_atomic(&self, _product_id: ProductId) -> Result<(), CatalogError> {
            *self.atomic_calls.lock().expect("lock") += 1;
            if self.atomic_available {
                *self.counter.lock().expect("lock") += 1;
                Ok(())
            } else {
                Err(unavailable())
            }
        }

        async fn read_clicks(&self, _product_id: ProductId) -> Result<i64, CatalogError> {
            if self.fallback_available {
                Ok(self.counter())
            } else {
                Err(unavailable())
            }
        }

        async fn write_clicks(
            &self,
            _product_id: ProductId,
            value: i64,
        ) -> Result<(), CatalogError> {
            *self.write_calls.lock().expect("lock") += 1;
            if self.fallback_available {
                *self.counter.lock().expect("lock") = value;
                Ok(())
            } else {
                Err(unavailable())
            }
        }
    }

    #[tokio::test]
    async fn test_atomic_path_preferred() {
        let sink = MemorySink {
            atomic_available: true,
            fallback_available: true,
            ..MemorySink::default()
        };

        record_with(&sink, ProductId::generate())
            .await
            .expect("atomic path");
        assert_eq!(sink.counter(), 1);
        assert_eq!(*sink.write_calls.lock().expect("lock"), 0);
    }

    #[tokio::test]
    async fn test_fallback_increments_when_atomic_fails() {
        let sink = MemorySink {
            atomic_available: false,
            fallback_available: true,
            counter: Mutex::new(7),
            ..MemorySink::default()
        };

        record_with(&sink, ProductId::generate())
            .await
            .expect("fallback path");
        assert_eq!(sink.counter(), 8);
        assert_eq!(*sink.atomic_calls.lock().expect("lock"), 1);
        assert_eq!(*sink.write_calls.lock().expect("lock"), 1);
    }

    #[tokio::test]
    async fn test_both_paths_failing_returns_error() {
        let sink = MemorySink::default();

        let result = record_with(&sink, ProductId::generate()).await;
        assert!(result.is_err());
        assert_eq!(sink.counter(), 0);
    }
}

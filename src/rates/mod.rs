//! Exchange Rates
//!
//! Currency catalog, immutable rate snapshots, and the service that holds
//! the active snapshot. The snapshot slot is read-mostly shared state:
//! refresh replaces the whole `Arc`, never mutates the table in place, so
//! readers never observe a partially updated table.

pub mod catalog;
pub mod fetch;
pub mod snapshot;

pub use catalog::{Currency, CATALOG};
pub use fetch::{RefreshError, DEFAULT_ENDPOINT};
pub use snapshot::{RateSnapshot, STALENESS_WINDOW_DAYS};

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new snapshot was fetched and installed
    Updated,
    /// Another refresh was already in flight; this request did nothing
    AlreadyRefreshing,
}

/// Holds the active rate snapshot and performs network refreshes.
///
/// At most one refresh runs at a time; requests made while one is
/// outstanding no-op.
pub struct RateService {
    current: RwLock<Arc<RateSnapshot>>,
    refreshing: AtomicBool,
    client: reqwest::Client,
    endpoint: String,
}

impl RateService {
    /// Create a service around an initial snapshot
    pub fn new(initial: RateSnapshot, endpoint: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
            refreshing: AtomicBool::new(false),
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The active snapshot
    pub fn current(&self) -> Arc<RateSnapshot> {
        self.current.read().clone()
    }

    /// Install a new snapshot wholesale
    pub fn replace(&self, snapshot: RateSnapshot) {
        *self.current.write() = Arc::new(snapshot);
    }

    /// Convert using the active snapshot; `None` when either code is
    /// missing from the table
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        self.current().convert(amount, from, to)
    }

    /// Fetch the latest rates and install them. On any error the current
    /// snapshot stays untouched.
    pub async fn refresh(&self) -> Result<RefreshOutcome, RefreshError> {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rate refresh already in flight, skipping");
            return Ok(RefreshOutcome::AlreadyRefreshing);
        }

        let result = fetch::fetch_latest(&self.client, &self.endpoint).await;
        self.refreshing.store(false, Ordering::Release);

        let snapshot = result?;
        info!(
            "Installed rate snapshot: {} rates against {}",
            snapshot.rates.len(),
            snapshot.base_code
        );
        self.replace(snapshot);
        Ok(RefreshOutcome::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn service() -> RateService {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), 1.0);
        rates.insert("EUR".to_string(), 0.92);
        RateService::new(RateSnapshot::new("USD", rates), DEFAULT_ENDPOINT)
    }

    #[test]
    fn test_convert_through_active_snapshot() {
        let service = service();
        let converted = service.convert(10.0, "EUR", "USD").unwrap();
        assert!((converted - 10.869565).abs() < 1e-6);
        assert!(service.convert(10.0, "EUR", "JPY").is_none());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let service = service();
        let before = service.current();

        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), 1.0);
        rates.insert("GBP".to_string(), 0.79);
        service.replace(RateSnapshot::new("USD", rates));

        let after = service.current();
        assert!(after.rates.contains_key("GBP"));
        assert!(!after.rates.contains_key("EUR"));
        // The reader that grabbed the old snapshot still sees a complete table
        assert!(before.rates.contains_key("EUR"));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_snapshot() {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), 1.0);
        let service = RateService::new(
            RateSnapshot::new("USD", rates),
            "http://127.0.0.1:1/latest/USD",
        );

        let err = service.refresh().await.unwrap_err();
        assert!(matches!(err, RefreshError::Network(_)));
        assert!(service.current().rates.contains_key("USD"));
    }

    #[tokio::test]
    async fn test_second_refresh_noops_while_in_flight() {
        let service = service();
        service.refreshing.store(true, Ordering::Release);
        let outcome = service.refresh().await.unwrap();
        assert_eq!(outcome, RefreshOutcome::AlreadyRefreshing);
    }
}

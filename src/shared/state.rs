//! Shared application state between the producer and worker threads

use crate::config::AppConfig;
use crate::rates::catalog;

/// The user's chosen source/destination currency pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPair {
    /// Currency printed on the price tag
    pub source: String,
    /// Currency to convert into
    pub destination: String,
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self {
            source: "USD".to_string(),
            destination: "EUR".to_string(),
        }
    }
}

impl CurrencyPair {
    /// Build a pair, validating both codes against the catalog
    pub fn new(source: &str, destination: &str) -> Option<Self> {
        let source = catalog::for_code(source)?;
        let destination = catalog::for_code(destination)?;
        Some(Self {
            source: source.code.to_string(),
            destination: destination.code.to_string(),
        })
    }

    /// Swap source and destination
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.destination);
    }
}

/// Central shared state between pipeline threads
#[derive(Debug, Clone)]
pub struct SharedAppState {
    /// Application configuration
    pub config: AppConfig,
    /// Active currency pair
    pub pair: CurrencyPair,
    /// Runtime counters (not persisted)
    pub runtime: RuntimeState,
}

impl SharedAppState {
    /// Create shared state from configuration; the pair starts from the
    /// configured defaults until storage overrides it
    pub fn new(config: AppConfig) -> Self {
        let pair = CurrencyPair::new(
            &config.general.source_currency,
            &config.general.destination_currency,
        )
        .unwrap_or_default();

        Self {
            config,
            pair,
            runtime: RuntimeState::default(),
        }
    }
}

/// Runtime state that is not persisted
#[derive(Debug, Clone, Default)]
pub struct RuntimeState {
    /// Frames received from the producer
    pub frames_seen: usize,
    /// Frames admitted past the throttle
    pub frames_processed: usize,
    /// Frames that yielded an amount
    pub amounts_extracted: usize,
    /// Calculator display after the most recent converted scan
    pub accumulator: Option<String>,
    /// Last error message (if any)
    pub last_error: Option<String>,
}

impl RuntimeState {
    /// Set an error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }
}

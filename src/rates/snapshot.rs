//! Immutable exchange-rate snapshot
//!
//! A snapshot is a timestamped table of units-of-currency per one unit of
//! the base currency. It is created whole, never mutated in place, and
//! replaced wholesale on refresh, so concurrent readers can share it
//! behind an `Arc` without locking.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base currency of the built-in default table
pub const DEFAULT_BASE: &str = "USD";

/// Rates older than this many whole days are reported as outdated
pub const STALENESS_WINDOW_DAYS: i64 = 7;

/// Offline default rate table keyed to USD, used from install until the
/// first successful network refresh.
const DEFAULT_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 149.50),
    ("CNY", 7.24),
    ("CHF", 0.88),
    ("CAD", 1.36),
    ("MXN", 17.15),
    ("GTQ", 7.82),
    ("HNL", 24.70),
    ("NIO", 36.50),
    ("CRC", 530.0),
    ("PAB", 1.0),
    ("BZD", 2.0),
    ("JMD", 155.0),
    ("TTD", 6.78),
    ("BBD", 2.0),
    ("BSD", 1.0),
    ("KYD", 0.83),
    ("XCD", 2.70),
    ("DOP", 57.0),
    ("HTG", 132.0),
    ("CUP", 24.0),
    ("AWG", 1.79),
    ("ANG", 1.79),
    ("BRL", 4.97),
    ("ARS", 350.0),
    ("CLP", 880.0),
    ("COP", 4050.0),
    ("PEN", 3.72),
    ("UYU", 39.0),
    ("PYG", 7280.0),
    ("BOB", 6.91),
    ("VES", 36.0),
    ("GYD", 209.0),
    ("SRD", 38.0),
    ("FKP", 0.79),
    ("NOK", 10.85),
    ("SEK", 10.45),
    ("DKK", 6.88),
    ("ISK", 138.0),
    ("PLN", 4.02),
    ("CZK", 22.50),
    ("HUF", 355.0),
    ("RON", 4.58),
    ("BGN", 1.80),
    ("UAH", 37.0),
    ("RUB", 89.50),
    ("BYN", 3.27),
    ("MDL", 17.80),
    ("RSD", 108.0),
    ("BAM", 1.80),
    ("HRK", 6.95),
    ("MKD", 57.0),
    ("ALL", 95.0),
    ("GEL", 2.70),
    ("AMD", 405.0),
    ("AZN", 1.70),
    ("TRY", 28.90),
    ("ILS", 3.68),
    ("AED", 3.67),
    ("SAR", 3.75),
    ("QAR", 3.64),
    ("KWD", 0.31),
    ("BHD", 0.38),
    ("OMR", 0.39),
    ("JOD", 0.71),
    ("LBP", 89500.0),
    ("SYP", 13000.0),
    ("IQD", 1310.0),
    ("IRR", 42000.0),
    ("YER", 250.0),
    ("INR", 83.12),
    ("PKR", 278.0),
    ("BDT", 110.0),
    ("LKR", 325.0),
    ("NPR", 133.0),
    ("BTN", 83.0),
    ("MVR", 15.40),
    ("AFN", 70.0),
    ("THB", 35.20),
    ("SGD", 1.34),
    ("MYR", 4.68),
    ("IDR", 15650.0),
    ("PHP", 55.80),
    ("VND", 24350.0),
    ("MMK", 2100.0),
    ("KHR", 4100.0),
    ("LAK", 20500.0),
    ("BND", 1.34),
    ("KRW", 1298.0),
    ("TWD", 31.50),
    ("HKD", 7.82),
    ("MOP", 8.05),
    ("MNT", 3450.0),
    ("KPW", 900.0),
    ("KZT", 450.0),
    ("UZS", 12300.0),
    ("TJS", 10.95),
    ("KGS", 89.0),
    ("TMT", 3.50),
    ("AUD", 1.53),
    ("NZD", 1.64),
    ("FJD", 2.25),
    ("PGK", 3.75),
    ("SBD", 8.45),
    ("VUV", 119.0),
    ("WST", 2.75),
    ("TOP", 2.36),
    ("XPF", 110.0),
    ("EGP", 30.90),
    ("MAD", 10.0),
    ("DZD", 135.0),
    ("TND", 3.10),
    ("LYD", 4.85),
    ("SDG", 600.0),
    ("NGN", 800.0),
    ("GHS", 12.0),
    ("XOF", 605.0),
    ("GMD", 67.0),
    ("GNF", 8600.0),
    ("SLL", 22500.0),
    ("LRD", 188.0),
    ("CVE", 102.0),
    ("MRU", 39.5),
    ("XAF", 605.0),
    ("CDF", 2750.0),
    ("AOA", 830.0),
    ("STN", 22.5),
    ("KES", 155.0),
    ("TZS", 2500.0),
    ("UGX", 3800.0),
    ("RWF", 1250.0),
    ("BIF", 2850.0),
    ("ETB", 56.0),
    ("DJF", 178.0),
    ("ERN", 15.0),
    ("SOS", 570.0),
    ("SSP", 950.0),
    ("ZAR", 18.65),
    ("BWP", 13.60),
    ("NAD", 18.65),
    ("SZL", 18.65),
    ("LSL", 18.65),
    ("ZMW", 25.0),
    ("MWK", 1680.0),
    ("ZWL", 6500.0),
    ("MZN", 63.5),
    ("MGA", 4500.0),
    ("MUR", 45.0),
    ("SCR", 13.50),
    ("KMF", 455.0),
    ("GIP", 0.79),
    ("SHP", 0.79),
    ("BMD", 1.0),
    ("FOK", 6.88),
    ("IMP", 0.79),
    ("JEP", 0.79),
    ("GGP", 0.79),
];

/// An immutable, timestamped exchange-rate table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Currency all rates are expressed against
    pub base_code: String,
    /// Units of currency per one unit of base
    pub rates: HashMap<String, f64>,
    /// When this table was captured
    pub captured_at: DateTime<Utc>,
}

impl RateSnapshot {
    /// Create a snapshot captured now
    pub fn new(base_code: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base_code: base_code.into(),
            rates,
            captured_at: Utc::now(),
        }
    }

    /// The built-in default table, captured now
    pub fn default_snapshot() -> Self {
        let rates = DEFAULT_RATES
            .iter()
            .map(|&(code, rate)| (code.to_string(), rate))
            .collect();
        Self::new(DEFAULT_BASE, rates)
    }

    /// Convert an amount between two currencies through the base.
    ///
    /// Returns `None` when either code is absent from the table. No
    /// rounding is applied; display rounding is the caller's concern.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        let source_rate = self.rates.get(from)?;
        let dest_rate = self.rates.get(to)?;
        Some(amount / source_rate * dest_rate)
    }

    /// Whether the snapshot is older than the default staleness window.
    /// Informational only; conversion keeps working on stale rates.
    pub fn is_outdated(&self) -> bool {
        self.is_outdated_at(Utc::now(), Duration::days(STALENESS_WINDOW_DAYS))
    }

    /// Staleness check against an explicit clock and window
    pub fn is_outdated_at(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now - self.captured_at > window
    }

    /// Human-readable age of the snapshot, for display next to results
    pub fn age_description(&self, now: DateTime<Utc>) -> String {
        let age = now - self.captured_at;
        if age < Duration::minutes(1) {
            "just now".to_string()
        } else if age < Duration::hours(1) {
            format!("{}m ago", age.num_minutes())
        } else if age < Duration::days(1) {
            format!("{}h ago", age.num_hours())
        } else {
            format!("{}d ago", age.num_days())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(pairs: &[(&str, f64)]) -> RateSnapshot {
        let rates = pairs
            .iter()
            .map(|&(code, rate)| (code.to_string(), rate))
            .collect();
        RateSnapshot::new("USD", rates)
    }

    #[test]
    fn test_convert_through_base() {
        let snapshot = snapshot_with(&[("EUR", 0.92), ("USD", 1.0)]);
        let converted = snapshot.convert(10.0, "EUR", "USD").unwrap();
        assert!((converted - 10.869565).abs() < 1e-6);
    }

    #[test]
    fn test_convert_missing_code_is_unavailable() {
        let snapshot = snapshot_with(&[("EUR", 0.92), ("USD", 1.0)]);
        assert!(snapshot.convert(10.0, "EUR", "GBP").is_none());
        assert!(snapshot.convert(10.0, "XXX", "USD").is_none());
    }

    #[test]
    fn test_convert_identity() {
        let snapshot = snapshot_with(&[("EUR", 0.92), ("USD", 1.0)]);
        let converted = snapshot.convert(42.0, "EUR", "EUR").unwrap();
        assert!((converted - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_staleness_boundary() {
        let mut snapshot = snapshot_with(&[("USD", 1.0)]);
        let now = Utc::now();
        let window = Duration::days(7);

        snapshot.captured_at = now - Duration::days(7) + Duration::seconds(1);
        assert!(!snapshot.is_outdated_at(now, window));

        snapshot.captured_at = now - Duration::days(7);
        assert!(!snapshot.is_outdated_at(now, window));

        snapshot.captured_at = now - Duration::days(7) - Duration::seconds(1);
        assert!(snapshot.is_outdated_at(now, window));
    }

    #[test]
    fn test_default_snapshot_invariants() {
        let snapshot = RateSnapshot::default_snapshot();
        assert_eq!(snapshot.base_code, "USD");
        assert_eq!(snapshot.rates.get("USD"), Some(&1.0));
        assert!(snapshot.rates.values().all(|&r| r > 0.0));
        assert!(snapshot.rates.len() > 100);
        assert!(!snapshot.is_outdated());
    }

    #[test]
    fn test_serde_round_trip() {
        let snapshot = snapshot_with(&[("EUR", 0.92), ("USD", 1.0)]);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: RateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base_code, snapshot.base_code);
        assert_eq!(parsed.rates, snapshot.rates);
        assert_eq!(parsed.captured_at, snapshot.captured_at);
    }

    #[test]
    fn test_age_description() {
        let snapshot = snapshot_with(&[("USD", 1.0)]);
        let now = snapshot.captured_at;
        assert_eq!(snapshot.age_description(now), "just now");
        assert_eq!(snapshot.age_description(now + Duration::minutes(5)), "5m ago");
        assert_eq!(snapshot.age_description(now + Duration::hours(3)), "3h ago");
        assert_eq!(snapshot.age_description(now + Duration::days(9)), "9d ago");
    }
}

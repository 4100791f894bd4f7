//! Application Configuration
//!
//! User settings and preferences stored in TOML format.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::capture::DEFAULT_PROCESS_INTERVAL_MS;
use crate::extract::LOW_CONFIDENCE_THRESHOLD;
use crate::rates::{DEFAULT_ENDPOINT, STALENESS_WINDOW_DAYS};
use crate::vision::RegionOfInterest;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Scan pipeline settings
    pub scan: ScanConfig,
    /// Exchange rate settings
    pub rates: RatesConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default source currency code (the currency on the price tag)
    pub source_currency: String,
    /// Default destination currency code
    pub destination_currency: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            source_currency: "USD".to_string(),
            destination_currency: "EUR".to_string(),
        }
    }
}

/// Scan pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Minimum milliseconds between processed frames
    pub process_interval_ms: u64,
    /// Normalized region candidates must fall inside
    pub region_of_interest: RegionOfInterest,
    /// Results below this confidence are flagged as uncertain
    pub low_confidence_threshold: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            process_interval_ms: DEFAULT_PROCESS_INTERVAL_MS,
            region_of_interest: RegionOfInterest::default(),
            low_confidence_threshold: LOW_CONFIDENCE_THRESHOLD,
        }
    }
}

/// Exchange rate settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Exchange rate service endpoint
    pub endpoint: String,
    /// Days after which a snapshot is reported as outdated
    pub staleness_days: i64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            staleness_days: STALENESS_WINDOW_DAYS,
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();

        assert_eq!(config.general.source_currency, "USD");
        assert_eq!(config.general.destination_currency, "EUR");

        assert_eq!(config.scan.process_interval_ms, 300);
        assert!((config.scan.low_confidence_threshold - 0.7).abs() < 0.01);
        assert!((config.scan.region_of_interest.width - 0.85).abs() < 0.01);
        assert!((config.scan.region_of_interest.height - 0.25).abs() < 0.01);

        assert_eq!(config.rates.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.rates.staleness_days, 7);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = AppConfig::default();

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.general.source_currency, parsed.general.source_currency);
        assert_eq!(config.scan.process_interval_ms, parsed.scan.process_interval_ms);
        assert_eq!(config.rates.endpoint, parsed.rates.endpoint);
    }

    #[test]
    fn test_config_with_custom_values() {
        let mut config = AppConfig::default();
        config.general.source_currency = "JPY".to_string();
        config.scan.process_interval_ms = 500;
        config.rates.staleness_days = 3;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.general.source_currency, "JPY");
        assert_eq!(parsed.scan.process_interval_ms, 500);
        assert_eq!(parsed.rates.staleness_days, 3);
    }

    #[test]
    fn test_save_and_load_config() {
        let config = AppConfig::default();
        let temp_file = NamedTempFile::new().unwrap();

        save_config(&config, temp_file.path()).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(config.general.destination_currency, loaded.general.destination_currency);
        assert_eq!(config.scan.process_interval_ms, loaded.scan.process_interval_ms);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not valid toml {{{{").unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}

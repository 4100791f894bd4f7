//! Exchange-rate refresh client
//!
//! A single GET against a fixed endpoint. Two response shapes are in the
//! wild for this service, `{base_code, conversion_rates}` and
//! `{base, rates}`; both normalize into one [`RateSnapshot`]. Any failure
//! leaves the previously persisted snapshot authoritative.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

use super::snapshot::RateSnapshot;

/// Fixed exchange-rate service endpoint
pub const DEFAULT_ENDPOINT: &str = "https://open.er-api.com/v6/latest/USD";

/// Typed refresh failures, surfaced to the caller as messages
#[derive(Debug, Error)]
pub enum RefreshError {
    /// The configured endpoint is not a valid URL
    #[error("invalid exchange rate API URL: {0}")]
    InvalidEndpoint(String),
    /// Transport failure or non-success HTTP status
    #[error("network connection failed: {0}")]
    Network(String),
    /// JSON present but matching neither tolerated shape, or violating
    /// the rate-table invariants
    #[error("unable to parse exchange rate data")]
    Unparsable,
}

/// Union of the two tolerated response shapes
#[derive(Debug, Deserialize)]
struct RateApiResponse {
    base_code: Option<String>,
    conversion_rates: Option<HashMap<String, f64>>,
    base: Option<String>,
    rates: Option<HashMap<String, f64>>,
}

impl RateApiResponse {
    /// Normalize whichever shape was present into a snapshot captured now
    fn into_snapshot(self) -> Result<RateSnapshot, RefreshError> {
        let (base, rates) = match (self.base_code, self.conversion_rates, self.base, self.rates) {
            (Some(base), Some(rates), _, _) => (base, rates),
            (_, _, Some(base), Some(rates)) => (base, rates),
            _ => return Err(RefreshError::Unparsable),
        };

        if rates.is_empty() || rates.values().any(|&r| !(r > 0.0)) {
            return Err(RefreshError::Unparsable);
        }
        if let Some(&base_rate) = rates.get(&base) {
            if base_rate != 1.0 {
                return Err(RefreshError::Unparsable);
            }
        }

        Ok(RateSnapshot::new(base, rates))
    }
}

/// Parse a raw response body into a snapshot
pub fn parse_response(body: &str) -> Result<RateSnapshot, RefreshError> {
    let response: RateApiResponse =
        serde_json::from_str(body).map_err(|_| RefreshError::Unparsable)?;
    response.into_snapshot()
}

/// Fetch the latest rates from the endpoint
pub async fn fetch_latest(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<RateSnapshot, RefreshError> {
    let url = reqwest::Url::parse(endpoint)
        .map_err(|e| RefreshError::InvalidEndpoint(e.to_string()))?;

    debug!("Fetching exchange rates from {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| RefreshError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RefreshError::Network(format!("HTTP {}", status)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| RefreshError::Network(e.to_string()))?;

    let snapshot = parse_response(&body)?;
    info!(
        "Fetched {} rates against {}",
        snapshot.rates.len(),
        snapshot.base_code
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_rates_shape() {
        let snapshot = parse_response(
            r#"{"result":"success","base_code":"USD","conversion_rates":{"USD":1.0,"EUR":0.92}}"#,
        )
        .unwrap();
        assert_eq!(snapshot.base_code, "USD");
        assert_eq!(snapshot.rates.get("EUR"), Some(&0.92));
    }

    #[test]
    fn test_base_rates_shape() {
        let snapshot =
            parse_response(r#"{"base":"USD","rates":{"USD":1.0,"GBP":0.79}}"#).unwrap();
        assert_eq!(snapshot.base_code, "USD");
        assert_eq!(snapshot.rates.get("GBP"), Some(&0.79));
    }

    #[test]
    fn test_unknown_shape_is_unparsable() {
        let err = parse_response(r#"{"currencies":{"EUR":0.92}}"#).unwrap_err();
        assert!(matches!(err, RefreshError::Unparsable));
    }

    #[test]
    fn test_invalid_json_is_unparsable() {
        assert!(matches!(
            parse_response("not json"),
            Err(RefreshError::Unparsable)
        ));
    }

    #[test]
    fn test_nonpositive_rate_is_unparsable() {
        assert!(matches!(
            parse_response(r#"{"base":"USD","rates":{"USD":1.0,"EUR":-0.5}}"#),
            Err(RefreshError::Unparsable)
        ));
        assert!(matches!(
            parse_response(r#"{"base":"USD","rates":{"USD":1.0,"EUR":0.0}}"#),
            Err(RefreshError::Unparsable)
        ));
    }

    #[test]
    fn test_base_rate_must_be_one_when_present() {
        assert!(matches!(
            parse_response(r#"{"base":"USD","rates":{"USD":2.0,"EUR":0.92}}"#),
            Err(RefreshError::Unparsable)
        ));
        // Base absent from the table is tolerated
        assert!(parse_response(r#"{"base":"USD","rates":{"EUR":0.92}}"#).is_ok());
    }

    #[test]
    fn test_empty_table_is_unparsable() {
        assert!(matches!(
            parse_response(r#"{"base":"USD","rates":{}}"#),
            Err(RefreshError::Unparsable)
        ));
    }

    #[tokio::test]
    async fn test_invalid_endpoint() {
        let client = reqwest::Client::new();
        let err = fetch_latest(&client, "not a url").await.unwrap_err();
        assert!(matches!(err, RefreshError::InvalidEndpoint(_)));
    }
}

//! Amount Extraction
//!
//! Turns recognized text candidates into a monetary amount. Robust to
//! locale-specific thousands/decimal separator conventions and to several
//! simultaneous currency symbol conventions. A frame with no visible
//! amount is a routine outcome, so misses are absent results, not errors.

pub mod number;
pub mod patterns;

pub use number::parse_number;

use tracing::debug;

use crate::vision::TextCandidate;
use patterns::AMOUNT_PATTERNS;

/// Results below this confidence should be flagged as uncertain by the
/// caller. Display-only concern; the result is still returned.
pub const LOW_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// A monetary amount extracted from recognized text
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedAmount {
    /// Parsed numeric value
    pub value: f64,
    /// Currency symbol or code captured alongside the number, if any
    pub currency_hint: Option<String>,
    /// Original candidate text the amount was found in
    pub source_text: String,
    /// Recognition confidence of the source candidate (0.0 - 1.0)
    pub confidence: f32,
}

impl ExtractedAmount {
    /// Whether the caller should flag this result as uncertain
    pub fn is_uncertain(&self) -> bool {
        self.confidence < LOW_CONFIDENCE_THRESHOLD
    }
}

/// Find the best currency amount across all candidates.
///
/// Each candidate is tried against the ordered pattern set, stopping at
/// the first pattern that matches within that candidate. Across
/// candidates the match with strictly highest confidence wins; equal
/// confidence keeps the first seen. Returns `None` when no candidate
/// yields a valid extraction.
pub fn extract(candidates: &[TextCandidate]) -> Option<ExtractedAmount> {
    let mut best: Option<ExtractedAmount> = None;

    for candidate in candidates {
        let Some(result) = extract_from_text(&candidate.text, candidate.confidence) else {
            continue;
        };

        match &best {
            Some(current) if result.confidence <= current.confidence => {}
            _ => best = Some(result),
        }
    }

    if let Some(ref amount) = best {
        debug!(
            "Extracted {} (hint {:?}, confidence {:.2}) from {:?}",
            amount.value, amount.currency_hint, amount.confidence, amount.source_text
        );
    }

    best
}

/// Try the ordered pattern set against a single piece of text
pub fn extract_from_text(text: &str, confidence: f32) -> Option<ExtractedAmount> {
    AMOUNT_PATTERNS
        .iter()
        .find_map(|pattern| match_pattern(pattern, text, confidence))
}

/// Apply one pattern and classify its capture groups: a group that parses
/// under the separator rules is the number, any other non-empty group is
/// the currency hint. A match with no parsed number is rejected so the
/// next pattern gets a chance.
fn match_pattern(pattern: &regex::Regex, text: &str, confidence: f32) -> Option<ExtractedAmount> {
    let captures = pattern.captures(text)?;

    let mut value: Option<f64> = None;
    let mut currency_hint: Option<String> = None;

    for group in captures.iter().skip(1).flatten() {
        let group_text = group.as_str();
        if let Some(parsed) = parse_number(group_text) {
            value = Some(parsed);
        } else if !group_text.is_empty() {
            currency_hint = Some(group_text.to_string());
        }
    }

    Some(ExtractedAmount {
        value: value?,
        currency_hint,
        source_text: text.to_string(),
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(text: &str, confidence: f32) -> TextCandidate {
        TextCandidate::new(text, confidence)
    }

    #[test]
    fn test_later_separator_is_decimal_marker() {
        let us = extract_from_text("1,234.56", 0.9).unwrap();
        assert_eq!(us.value, 1234.56);

        let eu = extract_from_text("1.234,56", 0.9).unwrap();
        assert_eq!(eu.value, 1234.56);
    }

    #[test]
    fn test_single_comma_tail_rules() {
        assert_eq!(extract_from_text("12,5", 0.9).unwrap().value, 12.5);
        assert_eq!(extract_from_text("12,500", 0.9).unwrap().value, 12500.0);
    }

    #[test]
    fn test_symbol_prefix_captures_hint() {
        let result = extract_from_text("€4,99", 0.9).unwrap();
        assert_eq!(result.value, 4.99);
        assert_eq!(result.currency_hint.as_deref(), Some("€"));
    }

    #[test]
    fn test_suffix_code_captures_hint() {
        let result = extract_from_text("149.50 USD", 0.9).unwrap();
        assert_eq!(result.value, 149.50);
        assert_eq!(result.currency_hint.as_deref(), Some("USD"));
    }

    #[test]
    fn test_compound_prefix() {
        let result = extract_from_text("R$ 49,90", 0.9).unwrap();
        assert_eq!(result.value, 49.90);
        assert_eq!(result.currency_hint.as_deref(), Some("R$"));
    }

    #[test]
    fn test_bare_number_requires_whole_text() {
        assert!(extract_from_text("1299", 0.9).is_some());
        assert!(extract_from_text("aisle 1299", 0.9).is_none());
    }

    #[test]
    fn test_no_amount_in_text() {
        assert!(extract_from_text("SPECIAL OFFER", 0.9).is_none());
        assert!(extract(&[candidate("no prices here", 0.99)]).is_none());
    }

    #[test]
    fn test_highest_confidence_wins_across_candidates() {
        let result = extract(&[
            candidate("$10.00", 0.6),
            candidate("€20,00", 0.95),
            candidate("£30.00", 0.8),
        ])
        .unwrap();

        assert_eq!(result.value, 20.0);
        assert_eq!(result.currency_hint.as_deref(), Some("€"));
    }

    #[test]
    fn test_equal_confidence_keeps_first_seen() {
        let result = extract(&[candidate("$10.00", 0.8), candidate("$99.00", 0.8)]).unwrap();
        assert_eq!(result.value, 10.0);
    }

    #[test]
    fn test_low_confidence_flagged_not_rejected() {
        let result = extract(&[candidate("$5.00", 0.4)]).unwrap();
        assert!(result.is_uncertain());
        assert_eq!(result.value, 5.0);

        let confident = extract(&[candidate("$5.00", 0.9)]).unwrap();
        assert!(!confident.is_uncertain());
    }

    #[test]
    fn test_source_text_preserved() {
        let result = extract_from_text("€4,99", 0.9).unwrap();
        assert_eq!(result.source_text, "€4,99");
    }
}

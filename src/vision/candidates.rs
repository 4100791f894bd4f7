//! Recognized-text candidate types and input parsing
//!
//! The recognition engine is an external collaborator; this module only
//! defines the shape of what it hands us and how raw text blocks are
//! segmented into candidates.

use anyhow::{bail, Context, Result};

/// Confidence assigned to candidates segmented from a raw text block,
/// where the recognizer reported no per-fragment score.
pub const SEGMENTED_TEXT_CONFIDENCE: f32 = 0.9;

/// A normalized point in frame coordinates (0.0 - 1.0 on both axes)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

/// One piece of recognized text with its recognition confidence
#[derive(Debug, Clone)]
pub struct TextCandidate {
    /// Recognized text content
    pub text: String,
    /// Recognition confidence (0.0 - 1.0)
    pub confidence: f32,
    /// Center of the recognized bounding box in normalized coordinates,
    /// when the recognizer reported geometry
    pub center: Option<NormalizedPoint>,
}

impl TextCandidate {
    /// Create a candidate without geometry
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
            center: None,
        }
    }

    /// Create a candidate with a bounding box center
    pub fn with_center(text: impl Into<String>, confidence: f32, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
            center: Some(NormalizedPoint { x, y }),
        }
    }
}

/// Segment a block of pre-recognized text into candidates.
///
/// Each line is a candidate, and so is each whitespace-separated word of
/// the line, so that an amount embedded in a longer line still gets a
/// chance to match on its own. Empty fragments are dropped.
pub fn segment_text(block: &str) -> Vec<TextCandidate> {
    let mut candidates = Vec::new();

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        candidates.push(TextCandidate::new(trimmed, SEGMENTED_TEXT_CONFIDENCE));
        for word in trimmed.split_whitespace() {
            if word != trimmed {
                candidates.push(TextCandidate::new(word, SEGMENTED_TEXT_CONFIDENCE));
            }
        }
    }

    candidates
}

/// Parse one input line in the scanner's candidate format:
///
/// `text`, `confidence<TAB>text`, or `confidence<TAB>cx,cy<TAB>text`.
///
/// Lines without an explicit confidence get the segmented-text default.
pub fn parse_candidate_line(line: &str) -> Result<TextCandidate> {
    let mut fields: Vec<&str> = line.split('\t').collect();

    if fields.len() == 1 {
        return Ok(TextCandidate::new(
            fields[0].trim(),
            SEGMENTED_TEXT_CONFIDENCE,
        ));
    }

    let confidence: f32 = fields
        .remove(0)
        .trim()
        .parse()
        .context("invalid confidence field")?;
    if !(0.0..=1.0).contains(&confidence) {
        bail!("confidence {} out of range", confidence);
    }

    if fields.len() == 1 {
        return Ok(TextCandidate::new(fields[0].trim(), confidence));
    }

    let center = fields.remove(0);
    let (cx, cy) = center
        .split_once(',')
        .context("center field must be cx,cy")?;
    let cx: f32 = cx.trim().parse().context("invalid center x")?;
    let cy: f32 = cy.trim().parse().context("invalid center y")?;

    Ok(TextCandidate::with_center(
        fields.join("\t").trim(),
        confidence,
        cx,
        cy,
    ))
}

//! Region-of-interest filtering
//!
//! Recognized text is discarded before extraction unless its bounding box
//! center falls inside a configured normalized rectangle, matching the
//! bracket cutout shown to the user while scanning.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::candidates::{NormalizedPoint, TextCandidate};

/// A normalized rectangle (0.0 - 1.0 on both axes) used to discard
/// recognized text outside the area of visual interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionOfInterest {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Default for RegionOfInterest {
    /// Centered bracket region: 85% of frame width, 25% of frame height
    fn default() -> Self {
        Self::centered(0.85, 0.25)
    }
}

impl RegionOfInterest {
    /// Create a region of the given size centered in the frame
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            x: (1.0 - width) / 2.0,
            y: (1.0 - height) / 2.0,
            width,
            height,
        }
    }

    /// Whether the point lies inside this region
    pub fn contains(&self, point: NormalizedPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Filter candidates to those whose bounding box center falls inside
    /// this region. Candidates without geometry pass through untouched.
    pub fn filter(&self, candidates: Vec<TextCandidate>) -> Vec<TextCandidate> {
        let before = candidates.len();
        let kept: Vec<TextCandidate> = candidates
            .into_iter()
            .filter(|c| match c.center {
                Some(center) => self.contains(center),
                None => true,
            })
            .collect();

        if kept.len() != before {
            debug!(
                "Region of interest dropped {} of {} candidates",
                before - kept.len(),
                before
            );
        }

        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region_is_centered() {
        let roi = RegionOfInterest::default();
        assert!((roi.x - 0.075).abs() < 1e-6);
        assert!((roi.y - 0.375).abs() < 1e-6);
        assert!((roi.width - 0.85).abs() < 1e-6);
        assert!((roi.height - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_contains_center_and_edges() {
        let roi = RegionOfInterest::centered(0.5, 0.5);
        assert!(roi.contains(NormalizedPoint { x: 0.5, y: 0.5 }));
        assert!(roi.contains(NormalizedPoint { x: 0.25, y: 0.25 }));
        assert!(!roi.contains(NormalizedPoint { x: 0.1, y: 0.5 }));
        assert!(!roi.contains(NormalizedPoint { x: 0.5, y: 0.9 }));
    }

    #[test]
    fn test_filter_keeps_inside_and_geometryless() {
        let roi = RegionOfInterest::default();
        let candidates = vec![
            TextCandidate::with_center("$10", 0.9, 0.5, 0.5),
            TextCandidate::with_center("$99", 0.9, 0.5, 0.05),
            TextCandidate::new("$42", 0.9),
        ];

        let kept = roi.filter(candidates);
        let texts: Vec<&str> = kept.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["$10", "$42"]);
    }
}

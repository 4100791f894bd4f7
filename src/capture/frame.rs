//! Frame data structures for recognized camera content

use std::time::Instant;

use crate::vision::TextCandidate;

/// Recognition output for one processed camera frame
#[derive(Debug, Clone)]
pub struct RecognizedFrame {
    /// Text candidates produced by the recognition engine
    pub candidates: Vec<TextCandidate>,
    /// When the frame was processed
    pub timestamp: Instant,
}

impl RecognizedFrame {
    /// Create a frame timestamped now
    pub fn new(candidates: Vec<TextCandidate>) -> Self {
        Self {
            candidates,
            timestamp: Instant::now(),
        }
    }
}

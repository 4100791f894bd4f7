//! Vision/OCR Boundary
//!
//! The text-recognition engine is an external collaborator that produces
//! candidate strings with confidence scores and bounding boxes. This layer
//! defines those types, pre-filters candidates through the region of
//! interest, and segments raw text blocks into candidates.

pub mod candidates;
pub mod roi;

pub use candidates::{
    parse_candidate_line, segment_text, NormalizedPoint, TextCandidate,
    SEGMENTED_TEXT_CONFIDENCE,
};
pub use roi::RegionOfInterest;

//! Capture Layer
//!
//! The camera and recognition engine are external collaborators; what
//! arrives here is one [`RecognizedFrame`] per processed frame. This
//! layer bounds how often frames are admitted into extraction so the
//! recognition engine is never oversaturated.

pub mod frame;

pub use frame::RecognizedFrame;

use std::time::{Duration, Instant};

/// Default minimum interval between processed frames
pub const DEFAULT_PROCESS_INTERVAL_MS: u64 = 300;

/// Admits at most one frame per interval
#[derive(Debug)]
pub struct FrameThrottle {
    interval: Duration,
    last_admitted: Option<Instant>,
}

impl FrameThrottle {
    /// Create a throttle with the given minimum interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_admitted: None,
        }
    }

    /// Whether a frame arriving now should be processed. Admitting a
    /// frame starts the next interval.
    pub fn admit(&mut self) -> bool {
        self.admit_at(Instant::now())
    }

    fn admit_at(&mut self, now: Instant) -> bool {
        match self.last_admitted {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_admitted = Some(now);
                true
            }
        }
    }
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_PROCESS_INTERVAL_MS))
    }
}

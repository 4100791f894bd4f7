//! Shared state and messaging between pipeline threads

pub mod messages;
pub mod state;

pub use messages::{ScanResult, ScannerMessage};
pub use state::{CurrencyPair, RuntimeState, SharedAppState};

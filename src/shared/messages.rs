//! Message types passed between the frame producer and the scan worker

use crate::capture::RecognizedFrame;
use crate::extract::ExtractedAmount;
use crate::rates::Currency;

/// Messages sent from the frame producer to the scan worker
#[derive(Debug)]
pub enum ScannerMessage {
    /// A recognized frame ready for extraction
    Frame(RecognizedFrame),
    /// Input exhausted; the worker should finish up
    Shutdown,
}

/// A fully resolved scan: the extracted amount plus its conversion
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The amount found in the frame
    pub amount: ExtractedAmount,
    /// Catalog entry resolved from the currency hint, if any
    pub detected_currency: Option<&'static Currency>,
    /// Currency the amount was read as
    pub source_code: String,
    /// Currency the amount was converted into
    pub destination_code: String,
    /// Converted value, or `None` when a code is missing from the table
    pub converted: Option<f64>,
}

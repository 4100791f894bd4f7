//! Ordered currency-amount pattern set
//!
//! Patterns are tried in priority order and the first one that matches
//! within a candidate wins. A bare number is accepted only when it is the
//! entire text, so stray digits inside longer strings never match.

use lazy_static::lazy_static;
use regex::Regex;

/// Number body shared by all patterns: 1-3 leading digits, optional
/// separator-grouped thousands, optional 1-2 fractional digits.
const NUMBER: &str = r"[0-9]{1,3}(?:[,.]?[0-9]{3})*(?:[.,][0-9]{1,2})?";

/// Single-glyph currency symbols recognized in prefix and suffix position
const SYMBOLS: &str = r"\$€£¥₹₩₽฿₱₫₺₪";

lazy_static! {
    /// Patterns in priority order: symbol-prefixed amount, amount followed
    /// by a symbol or 3-letter code, compound-prefix amount, bare number.
    pub static ref AMOUNT_PATTERNS: Vec<Regex> = vec![
        Regex::new(&format!(r"(?i)([{SYMBOLS}])\s*({NUMBER})")).expect("symbol-prefix pattern"),
        Regex::new(&format!(
            r"(?i)({NUMBER})\s*([{SYMBOLS}]|EUR|USD|GBP|JPY|MXN)"
        ))
        .expect("suffix pattern"),
        Regex::new(&format!(
            r"(?i)(R\$|NT\$|Fr|kr|zł|Kč|Ft|RM|Rp|S/)\s*({NUMBER})"
        ))
        .expect("compound-prefix pattern"),
        Regex::new(&format!(r"(?i)^({NUMBER})$")).expect("bare-number pattern"),
    ];
}

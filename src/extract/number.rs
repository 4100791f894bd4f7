//! Ambiguous separator normalization
//!
//! Price tags mix US-style `1,234.56` and EU-style `1.234,56` grouping.
//! In both conventions the separator closest to the end of the string is
//! the decimal marker, which is what the rules below rely on.

/// Parse a numeric-looking substring into a value, resolving ambiguous
/// thousands/decimal separators.
///
/// Rules:
/// - both `,` and `.` present: the later separator is the decimal point,
///   the other is a thousands separator and is stripped;
/// - exactly one `,` and no `.`: a decimal point when at most two digits
///   follow it, otherwise a thousands separator;
/// - otherwise commas are thousands separators and `.` is the decimal
///   point.
///
/// Returns `None` when the cleaned string is not a valid number.
pub fn parse_number(text: &str) -> Option<f64> {
    let comma_count = text.matches(',').count();
    let dot_count = text.matches('.').count();

    let cleaned = if comma_count > 0 && dot_count > 0 {
        let last_comma = text.rfind(',').expect("comma counted above");
        let last_dot = text.rfind('.').expect("dot counted above");
        if last_comma > last_dot {
            // EU style: dots group thousands, comma marks decimals
            text.replace('.', "").replace(',', ".")
        } else {
            // US style: commas group thousands
            text.replace(',', "")
        }
    } else if comma_count == 1 && dot_count == 0 {
        let after_comma = &text[text.find(',').expect("comma counted above") + 1..];
        if after_comma.len() <= 2 {
            text.replace(',', ".")
        } else {
            text.replace(',', "")
        }
    } else {
        text.replace(',', "")
    };

    cleaned.parse().ok()
}

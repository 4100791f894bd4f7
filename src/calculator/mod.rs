//! Arithmetic accumulator for scanned amounts
//!
//! Chained left-to-right evaluation, no operator precedence: choosing an
//! operator while one is pending evaluates the pending operation first.
//! Division by zero is a terminal "Error" display, not a propagated
//! failure; the next digit entry starts a fresh number.

use std::fmt;

/// Display shown after division by zero
pub const ERROR_DISPLAY: &str = "Error";

/// Pending arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        };
        f.write_str(symbol)
    }
}

/// Calculator state machine
#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    operator: Option<Operator>,
    previous: f64,
    should_reset_display: bool,
    has_decimal: bool,
    percent_mode: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Initial state: display "0", no pending operator
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            operator: None,
            previous: 0.0,
            should_reset_display: false,
            has_decimal: false,
            percent_mode: false,
        }
    }

    /// Current display text
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Pending operator, for rendering the accumulator line
    pub fn pending(&self) -> Option<(f64, Operator)> {
        self.operator.map(|op| (self.previous, op))
    }

    /// Numeric value of the display, honoring percent mode. `None` while
    /// the display shows the error state.
    pub fn current_value(&self) -> Option<f64> {
        let raw: f64 = self.display.parse().ok()?;
        Some(if self.percent_mode { raw / 100.0 } else { raw })
    }

    /// Enter one digit. Replaces the display after a result, an operator,
    /// a percent, or the error state; appends otherwise.
    pub fn press_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9);
        let digit = (b'0' + digit) as char;

        if self.should_reset_display || self.percent_mode || self.display == ERROR_DISPLAY {
            self.display = digit.to_string();
            self.should_reset_display = false;
            self.percent_mode = false;
            self.has_decimal = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Insert the decimal point, at most once per operand
    pub fn press_decimal(&mut self) {
        if self.should_reset_display || self.display == ERROR_DISPLAY {
            self.display = "0.".to_string();
            self.should_reset_display = false;
            self.has_decimal = true;
        } else if !self.has_decimal {
            self.display.push('.');
            self.has_decimal = true;
        }
    }

    /// Choose an operator. A pending operator is evaluated first, so
    /// `1 + 2 × 3 =` runs as `(1 + 2) × 3`.
    pub fn set_operator(&mut self, operator: Operator) {
        if self.operator.is_some() {
            self.equals();
            if self.display == ERROR_DISPLAY {
                return;
            }
        }

        if let Some(value) = self.current_value() {
            self.previous = value;
        }
        self.operator = Some(operator);
        self.should_reset_display = true;
        self.has_decimal = false;
        self.percent_mode = false;
    }

    /// Evaluate the pending operation. Division by exactly zero puts the
    /// display into the error state and clears the operator.
    pub fn equals(&mut self) {
        let Some(operator) = self.operator else {
            return;
        };
        let Some(current) = self.current_value() else {
            return;
        };

        let result = match operator {
            Operator::Add => self.previous + current,
            Operator::Subtract => self.previous - current,
            Operator::Multiply => self.previous * current,
            Operator::Divide => {
                if current == 0.0 {
                    self.display = ERROR_DISPLAY.to_string();
                    self.operator = None;
                    self.percent_mode = false;
                    return;
                }
                self.previous / current
            }
        };

        self.display = format_number(result);
        self.operator = None;
        self.should_reset_display = true;
        self.has_decimal = self.display.contains('.');
        self.percent_mode = false;
    }

    /// Reset to the initial state
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Negate the displayed value in place; operator state is untouched
    pub fn toggle_sign(&mut self) {
        if let Ok(value) = self.display.parse::<f64>() {
            self.display = format_number(-value);
            self.has_decimal = self.display.contains('.');
        }
    }

    /// Reinterpret the displayed number as hundredths. The display text
    /// keeps showing the entered number; only the value changes. A
    /// subsequent digit entry clears percent mode.
    pub fn percent(&mut self) {
        if self.display.parse::<f64>().is_ok() {
            self.percent_mode = true;
        }
    }

    /// Whether percent mode is active, for rendering a trailing "%"
    pub fn percent_mode(&self) -> bool {
        self.percent_mode
    }

    /// Push an externally computed value (a converted scan result) into
    /// the display
    pub fn set_value(&mut self, value: f64) {
        self.display = format_number(value);
        self.has_decimal = self.display.contains('.');
        self.should_reset_display = true;
        self.percent_mode = false;
    }
}

/// Format a value for the display: integers without a fractional part,
/// everything else with up to eight fractional digits.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e10 {
        format!("{:.0}", value)
    } else {
        let formatted = format!("{:.8}", value);
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

//! Converter module - turns raw input text and a selected mode into a display string
//!
//! Every failure path maps to a fixed, user-facing message; nothing here
//! returns an error or panics.

pub mod format;
pub mod mode;
pub mod parse;

use std::fmt;

use serde::Serialize;

pub use format::*;
pub use mode::*;
pub use parse::*;

/// Shown when the input is empty or whitespace only
pub const MSG_EMPTY_INPUT: &str = "Please enter a temperature";
/// Shown when no conversion direction is selected
pub const MSG_NO_UNIT: &str = "Please select a unit";
/// Shown when the input is not a decimal number
pub const MSG_INVALID_NUMBER: &str = "Please enter a valid number";
/// Shown when the converted value does not fit in an `f64`
pub const MSG_OUT_OF_RANGE: &str = "Temperature is out of range";

/// Typed result of a single conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Successful conversion; `value` is already rounded to one decimal
    Converted { value: f64, unit: Unit },
    EmptyInput,
    NoUnitSelected,
    InvalidNumber,
    OutOfRange,
}

impl Outcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Converted { value, unit } => {
                write!(f, "{}", format_temperature(*value, *unit))
            }
            Outcome::EmptyInput => f.write_str(MSG_EMPTY_INPUT),
            Outcome::NoUnitSelected => f.write_str(MSG_NO_UNIT),
            Outcome::InvalidNumber => f.write_str(MSG_INVALID_NUMBER),
            Outcome::OutOfRange => f.write_str(MSG_OUT_OF_RANGE),
        }
    }
}

/// Evaluate one conversion request.
///
/// Checks run in a fixed order: empty input first, then the mode, then the
/// numeric value. So `evaluate("", Mode::NoneSelected)` is `EmptyInput` and
/// `evaluate("abc", Mode::NoneSelected)` is `NoUnitSelected`.
pub fn evaluate(input: &str, mode: Mode) -> Outcome {
    let parsed = parse_temperature(input);
    if parsed == Err(ParseError::Empty) {
        return Outcome::EmptyInput;
    }

    let Some(unit) = mode.target_unit() else {
        return Outcome::NoUnitSelected;
    };

    let Ok(temp) = parsed else {
        return Outcome::InvalidNumber;
    };

    let raw = unit.convert_from_other(temp);
    if !raw.is_finite() {
        return Outcome::OutOfRange;
    }

    Outcome::Converted {
        value: round_one_decimal(raw),
        unit,
    }
}

/// Convert `input` according to `mode` and return the string to display.
///
/// # Examples
/// ```
/// use tempconv::converter::{convert, Mode};
///
/// assert_eq!(convert("37", Mode::ToFahrenheit), "98.6°F");
/// assert_eq!(convert("212", Mode::ToCelsius), "100.0°C");
/// assert_eq!(convert("  ", Mode::ToCelsius), "Please enter a temperature");
/// assert_eq!(convert("98.6", Mode::NoneSelected), "Please select a unit");
/// ```
pub fn convert(input: &str, mode: Mode) -> String {
    evaluate(input, mode).to_string()
}

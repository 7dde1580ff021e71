//! Explicit, total parsing of user-typed temperatures

use thiserror::Error;

/// Reasons a piece of input text is not a usable temperature
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing left after trimming whitespace
    #[error("input is empty")]
    Empty,

    /// Text is not a decimal number
    #[error("'{0}' is not a valid number")]
    Invalid(String),

    /// Text parses, but to NaN or an infinity
    #[error("'{0}' is not a finite number")]
    NonFinite(String),
}

/// Parse a temperature reading from raw input text.
///
/// Leading and trailing whitespace is ignored. Accepts an optional sign,
/// digits with an optional fractional part, and an optional exponent
/// (`"-40"`, `"98.6"`, `".5"`, `"1e2"`). Anything else, including `NaN`
/// and `inf` spellings, is rejected.
pub fn parse_temperature(input: &str) -> Result<f64, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    if !is_decimal_literal(trimmed) {
        return Err(ParseError::Invalid(trimmed.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseError::Invalid(trimmed.to_string()))?;

    // Literals like 1e400 overflow to infinity
    if !value.is_finite() {
        return Err(ParseError::NonFinite(trimmed.to_string()));
    }

    Ok(value)
}

/// Whether `s` is exactly a decimal number literal:
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
pub fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

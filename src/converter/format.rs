//! One-decimal formatting of converted temperatures

use super::mode::Unit;

/// Round to one decimal place, halves away from zero.
///
/// The value is scaled by ten before rounding, so `0.25` becomes `0.3`
/// and `-0.25` becomes `-0.3`. Negative zero is normalised to `0.0`.
/// Magnitudes of `1e15` and above have no tenths and are returned as is.
pub fn round_one_decimal(value: f64) -> f64 {
    if value.abs() >= 1e15 {
        return value;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a value with exactly one decimal place and the unit suffix
pub fn format_temperature(value: f64, unit: Unit) -> String {
    format!("{:.1}{}", round_one_decimal(value), unit.suffix())
}

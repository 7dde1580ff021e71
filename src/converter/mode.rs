//! Conversion direction and temperature units

use std::fmt;

use serde::Serialize;

/// Temperature unit a conversion produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Display suffix appended to a formatted value
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    /// Convert a reading expressed in the *other* unit into this one.
    ///
    /// `Unit::Fahrenheit.convert_from_other(100.0)` treats 100 as Celsius.
    pub fn convert_from_other(&self, value: f64) -> f64 {
        match self {
            Unit::Fahrenheit => celsius_to_fahrenheit(value),
            Unit::Celsius => fahrenheit_to_celsius(value),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Celsius => write!(f, "Celsius"),
            Unit::Fahrenheit => write!(f, "Fahrenheit"),
        }
    }
}

/// Selected conversion direction.
///
/// The two directions are mutually exclusive; `NoneSelected` covers the case
/// where the caller has not picked either one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    ToFahrenheit,
    ToCelsius,
    #[default]
    NoneSelected,
}

impl Mode {
    /// Build a mode from the two selection flags a form or CLI exposes.
    ///
    /// When both flags are set the Fahrenheit flag takes priority.
    pub fn from_flags(to_fahrenheit: bool, to_celsius: bool) -> Self {
        if to_fahrenheit {
            Mode::ToFahrenheit
        } else if to_celsius {
            Mode::ToCelsius
        } else {
            Mode::NoneSelected
        }
    }

    /// Unit produced by this mode, if a direction is selected
    pub fn target_unit(&self) -> Option<Unit> {
        match self {
            Mode::ToFahrenheit => Some(Unit::Fahrenheit),
            Mode::ToCelsius => Some(Unit::Celsius),
            Mode::NoneSelected => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::ToFahrenheit => write!(f, "Celsius → Fahrenheit"),
            Mode::ToCelsius => write!(f, "Fahrenheit → Celsius"),
            Mode::NoneSelected => write!(f, "no unit selected"),
        }
    }
}

/// Convert degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(temp: f64) -> f64 {
    (temp * 9.0) / 5.0 + 32.0
}

/// Convert degrees Fahrenheit to degrees Celsius
pub fn fahrenheit_to_celsius(temp: f64) -> f64 {
    ((temp - 32.0) * 5.0) / 9.0
}

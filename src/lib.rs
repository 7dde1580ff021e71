//! tempconv: Temperature Conversion Library
//!
//! Converts user-entered temperatures between Celsius and Fahrenheit and
//! renders the result, or a fixed user-facing message, as a display string.

pub mod cli;
pub mod converter;
pub mod report;
pub mod utils;

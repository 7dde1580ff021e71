//! Terminal styling utilities

use console::{style, Emoji};

use crate::converter::{Mode, Outcome};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static THERMOMETER: Emoji<'_, '_> = Emoji("🌡️  ", "");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARNING, style(message).yellow());
}

/// Print the result of a single conversion.
///
/// Converted values are highlighted; the fixed messages (empty input, no
/// unit, invalid number) are shown as warnings.
pub fn print_result(input: &str, mode: Mode, outcome: &Outcome) {
    println!();
    if outcome.is_converted() {
        println!(
            "    {}{} {} {}",
            THERMOMETER,
            style(input.trim()).dim(),
            style("→").cyan(),
            style(outcome).green().bold()
        );
        println!("    {}", style(mode).dim());
    } else {
        print_warning(&outcome.to_string());
    }
    println!();
}

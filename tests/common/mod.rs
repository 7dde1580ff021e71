//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Write `lines` to a batch file inside a fresh temporary directory
pub fn create_temp_batch(lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("readings.txt");
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// Split a converted display string like "98.6°F" into its value and suffix
pub fn split_display(display: &str) -> (f64, &str) {
    let idx = display
        .find('°')
        .unwrap_or_else(|| panic!("No unit suffix in '{}'", display));
    let value = display[..idx]
        .parse()
        .unwrap_or_else(|_| panic!("No numeric value in '{}'", display));
    (value, &display[idx..])
}

/// Assert that a display string has exactly one digit after the decimal point
pub fn assert_one_decimal(display: &str) {
    let idx = display.find('°').expect("unit suffix");
    let number = &display[..idx];
    let dot = number
        .find('.')
        .unwrap_or_else(|| panic!("No decimal point in '{}'", display));
    assert_eq!(
        number.len() - dot - 1,
        1,
        "Expected exactly one decimal in '{}'",
        display
    );
}

//! Tests for CLI argument parsing

use clap::Parser;
use std::path::PathBuf;
use std::ffi::OsString;
use tempconv::cli::{hoist_negative_values, Cli, Commands};
use tempconv::converter::Mode;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["tempconv", "37"]);

    assert_eq!(cli.value.as_deref(), Some("37"));
    assert_eq!(cli.mode(), Mode::NoneSelected, "No flag should mean no unit");
    assert!(!cli.json, "Default json should be false");
    assert!(!cli.plain, "Default plain should be false");
    assert!(cli.command.is_none());
}

#[test]
fn test_cli_to_fahrenheit_flags() {
    let short = Cli::parse_from(["tempconv", "37", "-f"]);
    let long = Cli::parse_from(["tempconv", "37", "--to-fahrenheit"]);

    assert_eq!(short.mode(), Mode::ToFahrenheit);
    assert_eq!(long.mode(), Mode::ToFahrenheit);
}

#[test]
fn test_cli_to_celsius_flags() {
    let short = Cli::parse_from(["tempconv", "212", "-c"]);
    let long = Cli::parse_from(["tempconv", "--to-celsius", "212"]);

    assert_eq!(short.mode(), Mode::ToCelsius);
    assert_eq!(long.mode(), Mode::ToCelsius);
    assert_eq!(long.input_text(), "212");
}

#[test]
fn test_cli_negative_value() {
    let cli = Cli::parse_from(["tempconv", "-40", "-f"]);

    assert_eq!(cli.input_text(), "-40");
    assert_eq!(cli.mode(), Mode::ToFahrenheit);
}

#[test]
fn test_cli_unit_flags_are_exclusive() {
    let result = Cli::try_parse_from(["tempconv", "10", "-f", "-c"]);

    assert!(result.is_err(), "Both unit flags should be rejected");
}

#[test]
fn test_cli_missing_value_is_empty_input() {
    let cli = Cli::parse_from(["tempconv", "-f"]);

    assert!(cli.value.is_none());
    assert_eq!(cli.input_text(), "");
}

#[test]
fn test_cli_json_and_plain_conflict() {
    assert!(Cli::try_parse_from(["tempconv", "1", "-f", "--json", "--plain"]).is_err());
    assert!(Cli::parse_from(["tempconv", "1", "-f", "--json"]).json);
    assert!(Cli::parse_from(["tempconv", "1", "-f", "--plain"]).plain);
}

#[test]
fn test_cli_batch_subcommand() {
    let cli = Cli::parse_from([
        "tempconv",
        "batch",
        "readings.txt",
        "-c",
        "--export",
        "report.json",
    ]);

    match cli.command {
        Some(Commands::Batch {
            input,
            unit,
            export,
            no_table,
        }) => {
            assert_eq!(input, PathBuf::from("readings.txt"));
            assert_eq!(unit.mode(), Mode::ToCelsius);
            assert_eq!(export, Some(PathBuf::from("report.json")));
            assert!(!no_table);
        }
        other => panic!("Expected batch subcommand, got {:?}", other),
    }
}

#[test]
fn test_cli_batch_defaults() {
    let cli = Cli::parse_from(["tempconv", "batch", "readings.txt", "--no-table"]);

    match cli.command {
        Some(Commands::Batch {
            unit,
            export,
            no_table,
            ..
        }) => {
            assert_eq!(unit.mode(), Mode::NoneSelected);
            assert!(export.is_none());
            assert!(no_table);
        }
        other => panic!("Expected batch subcommand, got {:?}", other),
    }
}

#[test]
fn test_cli_batch_unit_flags_are_exclusive() {
    assert!(Cli::try_parse_from(["tempconv", "batch", "in.txt", "-f", "-c"]).is_err());
}

#[test]
fn test_cli_leading_dot_negative_value() {
    let cli = Cli::parse_from_hoisted(["tempconv", "-.5", "-f", "--plain"]);

    assert_eq!(cli.input_text(), "-.5");
    assert_eq!(cli.mode(), Mode::ToFahrenheit);
    assert!(cli.plain);
}

#[test]
fn test_cli_hoisted_exponent_and_integer_values() {
    let exp = Cli::parse_from_hoisted(["tempconv", "-1e2", "-c"]);
    let int = Cli::parse_from_hoisted(["tempconv", "-c", "-40"]);

    assert_eq!(exp.input_text(), "-1e2");
    assert_eq!(exp.mode(), Mode::ToCelsius);
    assert_eq!(int.input_text(), "-40");
}

#[test]
fn test_cli_hoisted_flags_still_exclusive() {
    assert!(Cli::try_parse_from_hoisted(["tempconv", "-.5", "-f", "-c"]).is_err());
}

#[test]
fn test_hoist_moves_only_numbers() {
    let args = hoist_negative_values(["tempconv", "-.5", "-f", "--plain"]);

    let expected: Vec<OsString> = ["tempconv", "-f", "--plain", "--", "-.5"]
        .iter()
        .map(OsString::from)
        .collect();
    assert_eq!(args, expected);
}

#[test]
fn test_hoist_leaves_separator_and_batch_alone() {
    let separated = hoist_negative_values(["tempconv", "-f", "--", "-.5"]);
    let batch = hoist_negative_values(["tempconv", "batch", "in.txt", "-c"]);
    let plain = hoist_negative_values(["tempconv", "37", "-f"]);

    assert_eq!(separated.len(), 4);
    assert_eq!(separated[3], OsString::from("-.5"));
    assert_eq!(batch.len(), 4);
    assert_eq!(plain.len(), 3, "No separator needed without negative values");
}

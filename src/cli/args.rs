//! Command-line argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::converter::{is_decimal_literal, Mode};

/// tempconv - Convert temperatures between Celsius and Fahrenheit
#[derive(Parser, Debug)]
#[command(name = "tempconv")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Temperature to convert (e.g. 37, -40, 98.6, -.5).
    /// An omitted value is treated as empty input.
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    #[command(flatten)]
    pub unit: UnitArgs,

    /// Print the result as a JSON object instead of styled text
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Print only the result string, without colours or icons
    #[arg(long, default_value = "false", conflicts_with = "json")]
    pub plain: bool,
}

/// Conversion direction flags. At most one may be given.
#[derive(Args, Debug, Default, Clone, Copy)]
#[group(multiple = false)]
pub struct UnitArgs {
    /// Convert from Celsius to Fahrenheit
    #[arg(short = 'f', long, default_value = "false")]
    pub to_fahrenheit: bool,

    /// Convert from Fahrenheit to Celsius
    #[arg(short = 'c', long, default_value = "false")]
    pub to_celsius: bool,
}

impl UnitArgs {
    pub fn mode(&self) -> Mode {
        Mode::from_flags(self.to_fahrenheit, self.to_celsius)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every line of a text file, one temperature per line
    Batch {
        /// Input file path (one temperature per line)
        input: PathBuf,

        #[command(flatten)]
        unit: UnitArgs,

        /// Write a JSON report of all results to this path
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Skip the per-line results table
        #[arg(long, default_value = "false")]
        no_table: bool,
    },
}

impl Cli {
    /// Parse arguments, reading hyphen-led numbers like `-.5` as the value
    pub fn parse_from_hoisted<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(hoist_negative_values(args))
    }

    /// Fallible form of [`Cli::parse_from_hoisted`]
    pub fn try_parse_from_hoisted<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(hoist_negative_values(args))
    }

    /// Selected conversion mode for a single-value run
    pub fn mode(&self) -> Mode {
        self.unit.mode()
    }

    /// Raw input text, empty when no value was given
    pub fn input_text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Move hyphen-led numbers (`-40`, `-.5`, `-1e3`) behind a `--` separator.
///
/// clap only recognises negative numbers that start with a digit; `-.5`
/// would otherwise be read as the short flag `-.`. Argument lists that
/// already contain `--` or run the `batch` subcommand are left untouched.
pub fn hoist_negative_values<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let has_separator = args.iter().skip(1).any(|a| a.to_str() == Some("--"));
    let is_batch = args.get(1).and_then(|a| a.to_str()) == Some("batch");
    if has_separator || is_batch {
        return args;
    }

    let mut kept = Vec::with_capacity(args.len() + 1);
    let mut hoisted = Vec::new();
    for (idx, arg) in args.into_iter().enumerate() {
        let negative = idx > 0
            && arg
                .to_str()
                .is_some_and(|s| s.starts_with('-') && is_decimal_literal(s));
        if negative {
            hoisted.push(arg);
        } else {
            kept.push(arg);
        }
    }

    if !hoisted.is_empty() {
        kept.push(OsString::from("--"));
        kept.extend(hoisted);
    }
    kept
}

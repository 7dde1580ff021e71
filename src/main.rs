//! tempconv: Temperature Conversion CLI Tool
//!
//! Reads a temperature and a conversion direction from the command line and
//! prints the converted value.

use anyhow::{Context, Result};
use serde_json::json;

use tempconv::cli::{run_batch, Cli, Commands};
use tempconv::converter::evaluate;
use tempconv::utils::print_result;

fn main() -> Result<()> {
    let cli = Cli::parse_from_hoisted(std::env::args_os());

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Batch {
                input,
                unit,
                export,
                no_table,
            } => run_batch(input, unit.mode(), export.as_deref(), !*no_table).map(|_| ()),
        };
    }

    let mode = cli.mode();
    let input = cli.input_text();
    let outcome = evaluate(input, mode);

    if cli.json {
        let record = json!({
            "input": input,
            "mode": mode,
            "outcome": outcome,
            "display": outcome.to_string(),
        });
        let rendered =
            serde_json::to_string_pretty(&record).context("Failed to serialize result to JSON")?;
        println!("{}", rendered);
    } else if cli.plain {
        console::set_colors_enabled(false);
        println!("{}", outcome);
    } else {
        print_result(input, mode, &outcome);
    }

    Ok(())
}

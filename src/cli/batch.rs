//! Batch conversion of a file with one temperature per line

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use indicatif::ProgressBar;

use crate::converter::{evaluate, Mode};
use crate::report::{export_batch_report, BatchEntry, BatchSummary};
use crate::utils::{create_progress_bar, finish_with_success, print_info, print_success};

/// Read the lines of a batch file.
///
/// Line terminators are stripped; whitespace inside a line is kept and left
/// to the converter.
pub fn read_batch(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Evaluate every line with the same mode, ticking `progress` once per line
pub fn evaluate_batch(
    lines: &[String],
    mode: Mode,
    progress: Option<&ProgressBar>,
) -> Vec<BatchEntry> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, input)| {
            let outcome = evaluate(input, mode);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            BatchEntry {
                line: idx + 1,
                input: input.clone(),
                outcome,
            }
        })
        .collect()
}

/// Run a batch conversion and print the results
///
/// # Arguments
/// * `input` - Path to the text file, one temperature per line
/// * `mode` - Conversion direction applied to every line
/// * `export` - Optional path for a JSON report
/// * `show_table` - Print the per-line results table
pub fn run_batch(
    input: &Path,
    mode: Mode,
    export: Option<&Path>,
    show_table: bool,
) -> Result<BatchSummary> {
    println!(
        "\n {} Batch conversion",
        style("◆").cyan().bold()
    );
    println!("   Input: {}", style(input.display()).dim());
    println!("   Mode:  {}", style(mode).dim());
    println!();

    let lines = read_batch(input)?;
    if lines.is_empty() {
        print_info("Batch file contains no lines");
    }

    let pb = create_progress_bar(lines.len() as u64, "Converting");
    let entries = evaluate_batch(&lines, mode, Some(&pb));
    finish_with_success(&pb, &format!("Converted {} line(s)", entries.len()));

    let summary = BatchSummary::from_entries(&entries);
    if show_table {
        summary.display_results(&entries);
    }
    summary.display();

    if let Some(path) = export {
        export_batch_report(&entries, mode, &input.display().to_string(), path)?;
        print_success(&format!("Report written to {}", path.display()));
    }

    Ok(summary)
}

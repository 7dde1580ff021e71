//! Batch summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::converter::Outcome;

/// One evaluated line of a batch file
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    /// 1-based line number in the source file
    pub line: usize,
    pub input: String,
    pub outcome: Outcome,
}

/// Counts of each outcome across a batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub empty: usize,
    pub no_unit: usize,
    pub invalid: usize,
    pub out_of_range: usize,
}

impl BatchSummary {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut summary = Self {
            total: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            match entry.outcome {
                Outcome::Converted { .. } => summary.converted += 1,
                Outcome::EmptyInput => summary.empty += 1,
                Outcome::NoUnitSelected => summary.no_unit += 1,
                Outcome::InvalidNumber => summary.invalid += 1,
                Outcome::OutOfRange => summary.out_of_range += 1,
            }
        }

        summary
    }

    /// Lines that did not produce a temperature
    pub fn rejected(&self) -> usize {
        self.total - self.converted
    }

    /// Print the per-line results table
    pub fn display_results(&self, entries: &[BatchEntry]) {
        println!();
        println!(
            "    {} {}",
            style("🌡").cyan(),
            style("RESULTS").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Line").add_attribute(Attribute::Bold),
            Cell::new("Input").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
        ]);

        for entry in entries {
            let color = if entry.outcome.is_converted() {
                Color::Green
            } else {
                Color::Yellow
            };
            table.add_row(vec![
                Cell::new(entry.line),
                Cell::new(entry.input.trim()),
                Cell::new(entry.outcome.to_string()).fg(color),
            ]);
        }

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }

    /// Print the outcome counts
    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("BATCH SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📄 Lines"), Cell::new(self.total)]);
        table.add_row(vec![
            Cell::new("✅ Converted"),
            Cell::new(self.converted)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let counts = [
            ("⬜ Empty", self.empty),
            ("❔ No unit", self.no_unit),
            ("❌ Invalid", self.invalid),
            ("⚠️  Out of range", self.out_of_range),
        ];
        for (label, count) in counts {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(count).fg(if count == 0 { Color::White } else { Color::Red }),
            ]);
        }

        table.add_row(vec![
            Cell::new("🚫 Rejected"),
            Cell::new(self.rejected())
                .fg(if self.rejected() == 0 { Color::Green } else { Color::Yellow })
                .add_attribute(Attribute::Bold),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}

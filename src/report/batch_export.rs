//! Batch report export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::converter::{Mode, Outcome};

use super::summary::{BatchEntry, BatchSummary};

/// Metadata about the batch run
#[derive(Serialize)]
pub struct BatchMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    pub tempconv_version: String,
    pub input_file: String,
    pub mode: Mode,
}

/// A single line's result
#[derive(Serialize)]
pub struct BatchExportEntry {
    pub line: usize,
    pub input: String,
    /// Outcome fields (status, and value/unit when converted) flattened in
    #[serde(flatten)]
    pub outcome: Outcome,
    /// The string a user would see
    pub display: String,
}

impl From<&BatchEntry> for BatchExportEntry {
    fn from(entry: &BatchEntry) -> Self {
        Self {
            line: entry.line,
            input: entry.input.clone(),
            outcome: entry.outcome,
            display: entry.outcome.to_string(),
        }
    }
}

/// Complete batch report with metadata
#[derive(Serialize)]
pub struct BatchReport {
    pub metadata: BatchMetadata,
    pub summary: BatchSummary,
    pub results: Vec<BatchExportEntry>,
}

impl BatchReport {
    pub fn new(entries: &[BatchEntry], mode: Mode, input_file: &str) -> Self {
        Self {
            metadata: BatchMetadata {
                timestamp: Utc::now().to_rfc3339(),
                tempconv_version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: input_file.to_string(),
                mode,
            },
            summary: BatchSummary::from_entries(entries),
            results: entries.iter().map(BatchExportEntry::from).collect(),
        }
    }
}

/// Export batch results to a JSON file
///
/// # Arguments
/// * `entries` - All evaluated lines
/// * `mode` - Mode the batch ran with
/// * `input_file` - Source file, recorded in the metadata
/// * `output_path` - Path to write the JSON file
pub fn export_batch_report(
    entries: &[BatchEntry],
    mode: Mode,
    input_file: &str,
    output_path: &Path,
) -> Result<()> {
    let report = BatchReport::new(entries, mode, input_file);

    let json = serde_json::to_string_pretty(&report)
        .context("Failed to serialize batch report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write batch report to {}", output_path.display()))?;

    Ok(())
}

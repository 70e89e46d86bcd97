//! Greatest command handler.

use super::exit_codes;
use crate::compare::Comparator;
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde_json::json;
use std::io::{BufRead, Write};

/// Read one version per line, trimming whitespace and skipping blank lines.
pub fn read_versions(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut versions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            versions.push(trimmed.to_string());
        }
    }
    Ok(versions)
}

/// Run the greatest command: print the newest of `versions` verbatim.
pub fn run_greatest(
    comparator: &Comparator,
    versions: &[String],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<i32> {
    tracing::debug!("Selecting greatest of {} versions", versions.len());
    let greatest = comparator
        .greatest(versions)
        .context("Failed to select the greatest version")?;

    match format {
        OutputFormat::Text => writeln!(out, "{greatest}")?,
        OutputFormat::Json => {
            let doc = json!({ "greatest": greatest, "count": versions.len() });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    Ok(exit_codes::SUCCESS)
}

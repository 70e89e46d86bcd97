//! Compare command handler.

use super::exit_codes;
use crate::compare::Comparator;
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;

/// Run the compare command: print how `a` relates to `b`.
pub fn run_compare(
    comparator: &Comparator,
    a: &str,
    b: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<i32> {
    let relation = comparator
        .relationship_from_strings(a, b)
        .with_context(|| format!("Failed to compare '{a}' with '{b}'"))?;

    match format {
        OutputFormat::Text => writeln!(out, "{relation}")?,
        OutputFormat::Json => {
            let doc = json!({ "a": a, "b": b, "relation": relation });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    Ok(exit_codes::SUCCESS)
}

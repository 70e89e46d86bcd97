//! Validate command handler.
//!
//! Reports, for each input, whether it is a well-formed version and how it
//! normalizes.

use super::exit_codes;
use crate::compare::Comparator;
use crate::config::OutputFormat;
use crate::error::ParseError;
use crate::version::Version;
use anyhow::Result;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::io::Write;

#[derive(Debug)]
struct ValidationEntry<'a> {
    input: &'a str,
    outcome: std::result::Result<Version, ParseError>,
}

impl ValidationEntry<'_> {
    const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl Serialize for ValidationEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationEntry", 3)?;
        state.serialize_field("input", self.input)?;
        state.serialize_field("valid", &self.is_valid())?;
        match &self.outcome {
            Ok(version) => state.serialize_field("normalized", &version.to_string())?,
            Err(e) => state.serialize_field("error", &e.to_string())?,
        }
        state.end()
    }
}

/// Run the validate command, returning [`exit_codes::INVALID_INPUT`] when any
/// input is rejected.
pub fn run_validate(
    comparator: &Comparator,
    versions: &[String],
    format: OutputFormat,
    quiet: bool,
    out: &mut dyn Write,
) -> Result<i32> {
    let entries: Vec<ValidationEntry<'_>> = versions
        .iter()
        .map(|input| ValidationEntry {
            input,
            outcome: comparator.parse(input),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for entry in &entries {
                match &entry.outcome {
                    Ok(version) => writeln!(out, "valid   {} ({version})", entry.input)?,
                    Err(e) => writeln!(out, "invalid {}: {e}", entry.input)?,
                }
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        }
    }

    let invalid = entries.iter().filter(|e| !e.is_valid()).count();
    if invalid > 0 {
        if !quiet {
            tracing::info!("{invalid} of {} inputs are not valid versions", entries.len());
        }
        Ok(exit_codes::INVALID_INPUT)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_validate_all_valid() {
        let mut out = Vec::new();
        let code = run_validate(
            &Comparator::default(),
            &inputs(&["4.4.3", "v2.3.0", "1.0.0-alpha+001"]),
            OutputFormat::Text,
            false,
            &mut out,
        )
        .unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("valid   v2.3.0 (2.3.0)"));
        assert!(text.contains("valid   1.0.0-alpha+001 (1.0.0-alpha)"));
    }

    #[test]
    fn test_validate_reports_invalid() {
        let mut out = Vec::new();
        let code = run_validate(
            &Comparator::default(),
            &inputs(&["8", "1.0.0"]),
            OutputFormat::Json,
            true,
            &mut out,
        )
        .unwrap();
        assert_eq!(code, exit_codes::INVALID_INPUT);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["valid"], false);
        assert!(value[0].get("normalized").is_none());
        assert_eq!(
            value[0]["error"],
            "provided tag (8) is not a valid semantic version"
        );
        assert_eq!(value[1]["valid"], true);
        assert_eq!(value[1]["normalized"], "1.0.0");
        assert!(value[1].get("error").is_none());
    }

    #[test]
    fn test_validate_text_reports_error() {
        let mut out = Vec::new();
        let code = run_validate(
            &Comparator::default(),
            &inputs(&["99999999999999999999.0.0"]),
            OutputFormat::Text,
            true,
            &mut out,
        )
        .unwrap();
        assert_eq!(code, exit_codes::INVALID_INPUT);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.trim_end(),
            "invalid 99999999999999999999.0.0: major component '99999999999999999999' \
             of '99999999999999999999.0.0' does not fit in 64 bits"
        );
    }
}

//! Config command handler.

use super::exit_codes;
use crate::config::{generate_example_config, generate_full_example_config, generate_json_schema};
use anyhow::Result;
use std::io::Write;

/// What the config command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOutput {
    /// The default values as YAML
    Example,
    /// Every option with comments
    Full,
    /// JSON Schema of the config format
    Schema,
}

pub fn run_config(output: ConfigOutput, out: &mut dyn Write) -> Result<i32> {
    let content = match output {
        ConfigOutput::Example => generate_example_config(),
        ConfigOutput::Full => generate_full_example_config(),
        ConfigOutput::Schema => generate_json_schema(),
    };
    write!(out, "{content}")?;
    if !content.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(exit_codes::SUCCESS)
}

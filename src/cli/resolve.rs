//! Effective configuration for a command-line run.
//!
//! Precedence, lowest first: defaults, then a preset or a config file, then
//! command-line flags.

use crate::config::{AppConfig, CliOverrides, ConfigPreset};
use crate::error::{Result, SemverCompError};
use std::path::Path;

/// Resolve the configuration a command runs with.
///
/// A preset replaces config file discovery. An explicit `config_path` that
/// cannot be loaded is an error rather than a silent fallback to defaults.
pub fn resolve_config(
    preset: Option<&str>,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<AppConfig> {
    if let Some(name) = preset {
        let Some(preset) = ConfigPreset::from_name(name) else {
            let valid: Vec<_> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
            return Err(SemverCompError::config(format!(
                "unknown preset '{name}', valid options: {}",
                valid.join(", ")
            )));
        };
        let mut config = AppConfig::from_preset(preset);
        config.apply_overrides(overrides);
        return Ok(config);
    }

    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides)?;
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    Ok(config)
}

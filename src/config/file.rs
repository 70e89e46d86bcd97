//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, OutputFormat};
use crate::error::SemverCompError;
use crate::version::PrefixPolicy;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".semvercomp.yaml",
    ".semvercomp.yml",
    "semvercomp.yaml",
    "semvercomp.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided (returned even when missing, so loading it
///    reports [`ConfigFileError::NotFound`])
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/semvercomp/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("semvercomp")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load config from an explicit path, or from a discovered file.
///
/// An explicit path must load: a missing or malformed file is an error. A
/// discovered file that fails to load is skipped with a warning and the
/// defaults are used.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    if let Some(path) = explicit_path {
        let config = load_config_file(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    let Some(path) = discover_config_file(None) else {
        return Ok((AppConfig::default(), None));
    };
    match load_config_file(&path) {
        Ok(config) => Ok((config, Some(path))),
        Err(e) => {
            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
            Ok((AppConfig::default(), None))
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

/// Settings given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub prefix: Option<PrefixPolicy>,
    pub format: Option<OutputFormat>,
    pub quiet: bool,
}

impl AppConfig {
    /// Layer command-line settings over this config. Every flag that was
    /// given wins, including one equal to the default.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(prefix) = overrides.prefix {
            self.compare.prefix = prefix;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.quiet {
            self.output.quiet = true;
        }
    }

    /// Load from file and apply CLI overrides.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &CliOverrides,
    ) -> Result<(Self, Option<PathBuf>), SemverCompError> {
        let (mut config, loaded_from) = load_or_default(config_path)?;
        config.apply_overrides(overrides);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from the default values.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        r"# semvercomp configuration
# Place this file at .semvercomp.yaml in your project root or ~/.config/semvercomp/

{}",
        serde_yaml_ng::to_string(&AppConfig::default()).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# semvercomp configuration file
# ==============================
#
# Place it at:
#   - .semvercomp.yaml in your project root
#   - ~/.config/semvercomp/semvercomp.yaml for global config
#
# Command-line flags always override file settings.

compare:
  # Leading 'v' handling: lowercase, any-case, forbidden
  prefix: lowercase
  # Same major.minor.patch, different prerelease: ignore (Equal) or lexical
  prerelease: ignore
  # Starting point when picking the greatest version
  seed: 0.0.0

output:
  # text or json
  format: text
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

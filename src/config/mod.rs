//! Configuration module for semvercomp.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common tag conventions
//! - YAML config file loading and discovery
//! - Command-line overrides layered over file settings
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use semvercomp::config::{AppConfig, ConfigPreset};
//! use semvercomp::version::PrefixPolicy;
//!
//! let config = AppConfig::default();
//!
//! let config = AppConfig::from_preset(ConfigPreset::Lenient);
//!
//! let config = AppConfig::builder()
//!     .prefix(PrefixPolicy::AnyCase)
//!     .seed("1.0.0")
//!     .build();
//!
//! use semvercomp::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None)?;
//! ```
//!
//! # Configuration File
//!
//! Place a `.semvercomp.yaml` file in your project root or `~/.config/semvercomp/`:
//!
//! ```yaml
//! compare:
//!   prefix: any-case
//!   prerelease: lexical
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, CompareConfig, OutputConfig, OutputFormat, DEFAULT_SEED,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, CliOverrides, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.semvercomp.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

//! Configuration types for semvercomp.

use crate::compare::PrereleaseOrdering;
use crate::version::PrefixPolicy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Initial accumulator of the greatest-version reduction.
pub const DEFAULT_SEED: &str = "0.0.0";

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loadable from a YAML file and overridable from
/// the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Grammar and ordering settings
    pub compare: CompareConfig,
    /// Output settings for the command-line tool
    pub output: OutputConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn prefix(mut self, policy: PrefixPolicy) -> Self {
        self.config.compare.prefix = policy;
        self
    }

    pub const fn prerelease(mut self, ordering: PrereleaseOrdering) -> Self {
        self.config.compare.prerelease = ordering;
        self
    }

    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.config.compare.seed = seed.into();
        self
    }

    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.output.quiet = quiet;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// How versions are parsed and ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CompareConfig {
    /// Accepted leading `v` characters
    pub prefix: PrefixPolicy,
    /// Tie-break for equal triples with different prereleases
    pub prerelease: PrereleaseOrdering,
    /// Starting point of the greatest-version reduction
    pub seed: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            prefix: PrefixPolicy::default(),
            prerelease: PrereleaseOrdering::default(),
            seed: DEFAULT_SEED.to_string(),
        }
    }
}

/// Output format of the command-line tool.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One plain line per result
    #[default]
    Text,
    /// A JSON document
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Suppress informational log output
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.compare.prefix, PrefixPolicy::Lowercase);
        assert_eq!(config.compare.prerelease, PrereleaseOrdering::Ignore);
        assert_eq!(config.compare.seed, "0.0.0");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.quiet);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .prefix(PrefixPolicy::AnyCase)
            .prerelease(PrereleaseOrdering::Lexical)
            .seed("1.0.0")
            .format(OutputFormat::Json)
            .quiet(true)
            .build();

        assert_eq!(config.compare.prefix, PrefixPolicy::AnyCase);
        assert_eq!(config.compare.prerelease, PrereleaseOrdering::Lexical);
        assert_eq!(config.compare.seed, "1.0.0");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.quiet);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml_ng::from_str("compare:\n  prefix: any-case\n").unwrap();
        assert_eq!(config.compare.prefix, PrefixPolicy::AnyCase);
        assert_eq!(config.compare.seed, DEFAULT_SEED);
        assert_eq!(config.output, OutputConfig::default());
    }
}

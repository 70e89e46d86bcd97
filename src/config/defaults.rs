//! Named configuration presets.

use super::types::{AppConfig, CompareConfig, OutputConfig, DEFAULT_SEED};
use crate::compare::PrereleaseOrdering;
use crate::version::PrefixPolicy;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Canonical grammar, prerelease ignored when ordering
    Default,
    /// Also accepts an uppercase `V` prefix, as many tag histories contain
    Lenient,
    /// Bare versions only; prereleases rank below their release
    Strict,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "canonical" => Some(Self::Default),
            "lenient" | "permissive" | "loose" => Some(Self::Lenient),
            "strict" | "exact" => Some(Self::Strict),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Optional lowercase 'v' prefix; prerelease does not affect ordering",
            Self::Lenient => "Optional 'v' or 'V' prefix; prerelease does not affect ordering",
            Self::Strict => "No prefix; a release outranks its prereleases",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Lenient, Self::Strict]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Lenient => Self::lenient_preset(),
            ConfigPreset::Strict => Self::strict_preset(),
        }
    }

    #[must_use]
    pub fn lenient_preset() -> Self {
        Self {
            compare: CompareConfig {
                prefix: PrefixPolicy::AnyCase,
                prerelease: PrereleaseOrdering::Ignore,
                seed: DEFAULT_SEED.to_string(),
            },
            output: OutputConfig::default(),
        }
    }

    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            compare: CompareConfig {
                prefix: PrefixPolicy::Forbidden,
                prerelease: PrereleaseOrdering::Lexical,
                seed: DEFAULT_SEED.to_string(),
            },
            output: OutputConfig::default(),
        }
    }
}

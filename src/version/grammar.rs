//! The semantic-version grammar.
//!
//! One regular expression per [`PrefixPolicy`], each compiled on first use
//! and shared read-only afterwards.

use regex::{Captures, Regex};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Everything after the optional prefix. Digit classes are ASCII-only so
/// that every numeric capture is a plain decimal numeral.
const CORE_PATTERN: &str = concat!(
    r"(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
    r"(?:-(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
    r"(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
);

static LOWERCASE_PREFIX: LazyLock<Regex> = LazyLock::new(|| compile("v?"));
static ANY_CASE_PREFIX: LazyLock<Regex> = LazyLock::new(|| compile("[vV]?"));
static NO_PREFIX: LazyLock<Regex> = LazyLock::new(|| compile(""));

fn compile(prefix: &str) -> Regex {
    Regex::new(&format!("^{prefix}{CORE_PATTERN}")).expect("static regex")
}

/// Which leading `v` characters a version string may carry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum PrefixPolicy {
    /// An optional lowercase `v` (`v1.2.3`)
    #[default]
    Lowercase,
    /// An optional `v` or `V`
    AnyCase,
    /// Bare versions only
    Forbidden,
}

impl PrefixPolicy {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::AnyCase => "any-case",
            Self::Forbidden => "forbidden",
        }
    }

    /// Parse a policy from its config name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "lowercase" | "v" => Some(Self::Lowercase),
            "any-case" | "any" | "anycase" => Some(Self::AnyCase),
            "forbidden" | "none" => Some(Self::Forbidden),
            _ => None,
        }
    }

    pub(crate) fn regex(self) -> &'static Regex {
        match self {
            Self::Lowercase => &LOWERCASE_PREFIX,
            Self::AnyCase => &ANY_CASE_PREFIX,
            Self::Forbidden => &NO_PREFIX,
        }
    }
}

impl std::fmt::Display for PrefixPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Check `input` against the canonical grammar (optional lowercase `v`).
#[must_use]
pub fn is_valid(input: &str) -> bool {
    is_valid_with(input, PrefixPolicy::default())
}

/// Check `input` against the grammar under the given prefix policy.
#[must_use]
pub fn is_valid_with(input: &str, policy: PrefixPolicy) -> bool {
    policy.regex().is_match(input)
}

/// Named captures of a matching version string.
pub(crate) fn captures(input: &str, policy: PrefixPolicy) -> Option<Captures<'_>> {
    policy.regex().captures(input)
}

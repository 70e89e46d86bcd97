//! Ordering two versions by their numeric triple.

use super::relation::Relation;
use crate::config::{CompareConfig, Validatable};
use crate::error::{ParseError, SemverCompError};
use crate::version::{Parser, PrefixPolicy, Version};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// How two versions with the same `major.minor.patch` but different
/// prerelease strings relate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum PrereleaseOrdering {
    /// Prerelease is informational only: same triple means `Equal`
    #[default]
    Ignore,
    /// A release outranks any prerelease; prereleases compare byte-wise
    Lexical,
}

impl PrereleaseOrdering {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Lexical => "lexical",
        }
    }

    /// Resolve two prerelease strings (empty meaning release).
    fn resolve(self, a: &str, b: &str) -> Relation {
        match self {
            Self::Ignore => Relation::Equal,
            Self::Lexical => match (a.is_empty(), b.is_empty()) {
                (true, true) => Relation::Equal,
                (true, false) => Relation::Greater,
                (false, true) => Relation::Lower,
                (false, false) => a.cmp(b).into(),
            },
        }
    }
}

impl std::fmt::Display for PrereleaseOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses and compares versions under one [`CompareConfig`].
#[derive(Debug, Clone)]
pub struct Comparator {
    parser: Parser,
    prerelease: PrereleaseOrdering,
    pub(super) seed: String,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(&CompareConfig::default())
    }
}

impl Comparator {
    /// Build a comparator without validating `config`.
    ///
    /// An unparseable seed surfaces later as a [`ParseError`] from
    /// [`Comparator::greatest`]; use [`Comparator::from_config`] to catch it up front.
    #[must_use]
    pub fn new(config: &CompareConfig) -> Self {
        Self {
            parser: Parser::new(config.prefix),
            prerelease: config.prerelease,
            seed: config.seed.clone(),
        }
    }

    /// Validate `config` and build a comparator from it.
    pub fn from_config(config: &CompareConfig) -> Result<Self, SemverCompError> {
        let errors = config.validate();
        if !errors.is_empty() {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SemverCompError::config(message));
        }
        Ok(Self::new(config))
    }

    #[must_use]
    pub const fn prefix_policy(&self) -> PrefixPolicy {
        self.parser.policy()
    }

    #[must_use]
    pub const fn prerelease_ordering(&self) -> PrereleaseOrdering {
        self.prerelease
    }

    #[must_use]
    pub fn validate(&self, input: &str) -> bool {
        self.parser.validate(input)
    }

    pub fn parse(&self, input: &str) -> Result<Version, ParseError> {
        self.parser.parse(input)
    }

    /// Relation of `a` to `b`, most significant component first.
    #[must_use]
    pub fn relationship(&self, a: &Version, b: &Version) -> Relation {
        if a == b {
            return Relation::Equal;
        }
        match Relation::from(a.triple().cmp(&b.triple())) {
            Relation::Equal => self.prerelease.resolve(&a.prerelease, &b.prerelease),
            decided => decided,
        }
    }

    /// Parse both strings (`a` first) and compare them.
    pub fn relationship_from_strings(&self, a: &str, b: &str) -> Result<Relation, ParseError> {
        let a = self.parse(a)?;
        let b = self.parse(b)?;
        Ok(self.relationship(&a, &b))
    }
}

/// Comparator under the default configuration, shared by the free functions.
pub(super) static DEFAULT_COMPARATOR: LazyLock<Comparator> = LazyLock::new(Comparator::default);

/// Relation of `a` to `b` under the default configuration.
#[must_use]
pub fn relationship(a: &Version, b: &Version) -> Relation {
    DEFAULT_COMPARATOR.relationship(a, b)
}

/// Parse both strings with the canonical grammar and compare them.
pub fn relationship_from_strings(a: &str, b: &str) -> Result<Relation, ParseError> {
    DEFAULT_COMPARATOR.relationship_from_strings(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn test_major_dominates() {
        let a = Version::new(2, 0, 0);
        let b = Version::new(1, 1, 1);
        assert_eq!(relationship(&a, &b), Relation::Greater);
        assert_eq!(relationship(&b, &a), Relation::Lower);
    }

    #[test]
    fn test_minor_dominates_patch() {
        assert_eq!(
            relationship(&Version::new(1, 1, 0), &Version::new(1, 0, 1)),
            Relation::Greater
        );
        assert_eq!(
            relationship(&Version::new(1, 1, 2), &Version::new(1, 2, 1)),
            Relation::Lower
        );
    }

    #[test]
    fn test_patch_breaks_tie() {
        assert_eq!(
            relationship(&Version::new(1, 0, 1), &Version::new(1, 0, 0)),
            Relation::Greater
        );
    }

    #[test]
    fn test_equal() {
        assert_eq!(
            relationship(&Version::new(0, 0, 0), &Version::new(0, 0, 0)),
            Relation::Equal
        );
        assert_eq!(
            relationship(&v("1.2.2-alpha"), &v("1.2.2-alpha")),
            Relation::Equal
        );
    }

    #[test]
    fn test_prerelease_ignored_by_default() {
        let alpha = v("1.2.2-alpha");
        let beta = v("1.2.2-beta");
        assert_eq!(relationship(&alpha, &beta), Relation::Equal);
        assert_eq!(relationship(&beta, &alpha), Relation::Equal);
        assert_eq!(relationship(&alpha, &Version::new(1, 2, 2)), Relation::Equal);
    }

    #[test]
    fn test_prerelease_does_not_override_triple() {
        let comparator = Comparator::new(&CompareConfig {
            prerelease: PrereleaseOrdering::Lexical,
            ..CompareConfig::default()
        });
        assert_eq!(
            comparator.relationship(&v("1.2.3-alpha"), &v("1.2.2")),
            Relation::Greater
        );
    }

    #[test]
    fn test_lexical_prerelease_ordering() {
        let comparator = Comparator::new(&CompareConfig {
            prerelease: PrereleaseOrdering::Lexical,
            ..CompareConfig::default()
        });
        let alpha = v("1.2.2-alpha");
        let beta = v("1.2.2-beta");
        let release = Version::new(1, 2, 2);

        assert_eq!(comparator.relationship(&alpha, &beta), Relation::Lower);
        assert_eq!(comparator.relationship(&beta, &alpha), Relation::Greater);
        assert_eq!(comparator.relationship(&release, &beta), Relation::Greater);
        assert_eq!(comparator.relationship(&alpha, &release), Relation::Lower);
    }

    #[test]
    fn test_from_strings_prefix_tolerance() {
        assert_eq!(
            relationship_from_strings("1.0.0", "v1.0.0").unwrap(),
            Relation::Equal
        );
        assert_eq!(
            relationship_from_strings("2.0.0", "v1.0.0").unwrap(),
            Relation::Greater
        );
    }

    #[test]
    fn test_from_strings_reports_left_error_first() {
        let err = relationship_from_strings("bad-a", "bad-b").unwrap_err();
        assert_eq!(err.input(), "bad-a");

        let err = relationship_from_strings("1.0.0", "bad-b").unwrap_err();
        assert_eq!(err.input(), "bad-b");
    }

    #[test]
    fn test_uppercase_prefix_with_any_case_policy() {
        let comparator = Comparator::new(&CompareConfig {
            prefix: PrefixPolicy::AnyCase,
            ..CompareConfig::default()
        });
        assert_eq!(
            comparator.relationship_from_strings("V2.0.0", "1.0.0").unwrap(),
            Relation::Greater
        );
        assert!(relationship_from_strings("V2.0.0", "1.0.0").is_err());
    }

    #[test]
    fn test_from_config_rejects_bad_seed() {
        let config = CompareConfig {
            seed: "zero".to_string(),
            ..CompareConfig::default()
        };
        let err = Comparator::from_config(&config).unwrap_err();
        assert!(matches!(err, SemverCompError::Config(_)));
        assert!(err.to_string().contains("compare.seed"));
    }

    #[test]
    fn test_shared_default_matches_fresh_default() {
        let fresh = Comparator::default();
        assert_eq!(DEFAULT_COMPARATOR.prefix_policy(), fresh.prefix_policy());
        assert_eq!(DEFAULT_COMPARATOR.prerelease_ordering(), fresh.prerelease_ordering());
        assert_eq!(DEFAULT_COMPARATOR.seed, fresh.seed);
    }

    #[test]
    fn test_comparator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Comparator>();
        assert_send_sync::<Version>();
        assert_send_sync::<Relation>();
    }
}

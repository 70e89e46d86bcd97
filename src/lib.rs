//! **Validate, compare and pick the newest of semantic version strings.**
//!
//! `semvercomp` understands strings of the form
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILDMETADATA]`, optionally prefixed with
//! a lowercase `v`, and is meant for release tooling that has to find the
//! newest tag in a repository.
//!
//! Ordering only looks at `major.minor.patch`. The prerelease is kept and
//! takes part in equality, but by default two versions that share a triple
//! compare as [`Relation::Equal`]. Build metadata is accepted and discarded.
//!
//! ## Core Concepts & Modules
//!
//! - **[`version`]**: the grammar, the [`Version`] value and its [`Parser`].
//! - **[`compare`]**: [`Relation`], the [`Comparator`] and the greatest-version
//!   reduction.
//! - **[`config`]**: [`AppConfig`] with prefix policy, prerelease tie-break and
//!   reduction seed, loadable from `.semvercomp.yaml`.
//! - **[`error`]**: [`ParseError`] and the crate-wide [`SemverCompError`].
//!
//! ## Getting Started
//!
//! ```
//! use semvercomp::{greatest_version, relationship_from_strings, Relation};
//!
//! let tags = ["4.4.3", "v8.12.4", "0.1.0", "7.3.3", "4.67.31"];
//! assert_eq!(greatest_version(tags).unwrap(), "v8.12.4");
//!
//! assert_eq!(
//!     relationship_from_strings("1.0.0", "v1.0.0").unwrap(),
//!     Relation::Equal
//! );
//! ```
//!
//! ### Accepting `V`-prefixed tags
//!
//! ```
//! use semvercomp::config::{AppConfig, ConfigPreset};
//! use semvercomp::Comparator;
//!
//! let config = AppConfig::from_preset(ConfigPreset::Lenient);
//! let comparator = Comparator::from_config(&config.compare).unwrap();
//! assert_eq!(comparator.greatest(["V2.0.0", "v1.9.0"]).unwrap(), "V2.0.0");
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod version;

pub use compare::{
    greatest_version, relationship, relationship_from_strings, Comparator, PrereleaseOrdering,
    Relation,
};
pub use config::{AppConfig, AppConfigBuilder, CompareConfig, ConfigError, ConfigPreset, Validatable};
pub use error::{Component, ParseError, ParseErrorKind, Result, SemverCompError};
pub use version::{is_valid, Parser, PrefixPolicy, Version};

/// Parse a version string with the canonical grammar.
pub fn parse_version(input: &str) -> std::result::Result<Version, ParseError> {
    version::parse(input)
}

/// Render `version` in canonical form: `MAJOR.MINOR.PATCH[-PRERELEASE]`.
#[must_use]
pub fn format_version(version: &Version) -> String {
    version.to_string()
}

//! Unified error types for semvercomp.
//!
//! [`ParseError`] is what every parsing and comparison operation returns;
//! [`SemverCompError`] wraps it together with configuration failures for
//! callers that also load config files.

use crate::config::ConfigFileError;
use std::fmt;
use thiserror::Error;

/// Numeric component of a version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    /// Name of the component as used in the grammar's capture groups.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string cannot be turned into a [`Version`](crate::Version).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The input does not match the semantic-version grammar.
    #[error("provided tag ({input}) is not a valid semantic version")]
    InvalidFormat { input: String },

    /// A numeric component does not fit in a `u64`.
    #[error("{component} component '{digits}' of '{input}' does not fit in 64 bits")]
    NumericOverflow {
        input: String,
        component: Component,
        digits: String,
    },
}

/// Discriminant of a [`ParseError`], for callers that only need to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    InvalidFormat,
    NumericOverflow,
}

impl ParseError {
    /// Create an invalid-format error for the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Create an overflow error for one component of `input`.
    pub fn numeric_overflow(
        input: impl Into<String>,
        component: Component,
        digits: impl Into<String>,
    ) -> Self {
        Self::NumericOverflow {
            input: input.into(),
            component,
            digits: digits.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::InvalidFormat { .. } => ParseErrorKind::InvalidFormat,
            Self::NumericOverflow { .. } => ParseErrorKind::NumericOverflow,
        }
    }

    /// The rejected input string, verbatim.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input } | Self::NumericOverflow { input, .. } => input,
        }
    }
}

/// Main error type for semvercomp operations that go beyond parsing.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SemverCompError {
    /// A version string was rejected
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A config file could not be found, read or decoded
    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),
}

impl SemverCompError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Convenient Result type for semvercomp operations
pub type Result<T> = std::result::Result<T, SemverCompError>;

//! Turning raw strings into [`Version`] values.

use super::grammar::{self, PrefixPolicy};
use super::model::Version;
use crate::error::{Component, ParseError};

/// Version parser bound to a prefix policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    policy: PrefixPolicy,
}

impl Parser {
    #[must_use]
    pub const fn new(policy: PrefixPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> PrefixPolicy {
        self.policy
    }

    /// Check whether `input` is a well-formed version under this parser's policy.
    #[must_use]
    pub fn validate(&self, input: &str) -> bool {
        grammar::is_valid_with(input, self.policy)
    }

    /// Parse `input` into a [`Version`].
    ///
    /// Fails with [`ParseError::InvalidFormat`] when the grammar does not
    /// match and with [`ParseError::NumericOverflow`] when a component is
    /// too large for a `u64`.
    pub fn parse(&self, input: &str) -> Result<Version, ParseError> {
        let Some(caps) = grammar::captures(input, self.policy) else {
            return Err(ParseError::invalid_format(input));
        };

        let numeric = |component: Component| -> Result<u64, ParseError> {
            let digits = &caps[component.name()];
            // The grammar only admits ASCII numerals, so overflow is the
            // sole way this can fail.
            digits
                .parse::<u64>()
                .map_err(|_| ParseError::numeric_overflow(input, component, digits))
        };

        let version = Version {
            major: numeric(Component::Major)?,
            minor: numeric(Component::Minor)?,
            patch: numeric(Component::Patch)?,
            prerelease: caps
                .name("prerelease")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        };

        tracing::trace!(input, %version, "parsed version");
        Ok(version)
    }
}

/// Parse with the canonical grammar (optional lowercase `v`).
pub fn parse(input: &str) -> Result<Version, ParseError> {
    Parser::default().parse(input)
}

/// Parse under an explicit prefix policy.
pub fn parse_with(input: &str, policy: PrefixPolicy) -> Result<Version, ParseError> {
    Parser::new(policy).parse(input)
}

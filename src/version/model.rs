//! The parsed version value.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed semantic version.
///
/// Build metadata is accepted by the grammar but never stored, so it plays
/// no part in equality. The prerelease is kept verbatim; an empty string
/// means the version is a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) prerelease: String,
}

impl Version {
    /// Create a release version (no prerelease).
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: String::new(),
        }
    }

    #[must_use]
    pub const fn major(&self) -> u64 {
        self.major
    }

    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// The prerelease identifiers, if any.
    #[must_use]
    pub fn prerelease(&self) -> Option<&str> {
        if self.prerelease.is_empty() {
            None
        } else {
            Some(&self.prerelease)
        }
    }

    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// `(major, minor, patch)`, most significant first.
    #[must_use]
    pub const fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

/// Renders the canonical form: never a `v` prefix, never build metadata.
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        super::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl TryFrom<&Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        let mut converted = Self::new(version.major, version.minor, version.patch);
        if let Some(pre) = version.prerelease() {
            converted.pre = semver::Prerelease::new(pre)?;
        }
        Ok(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_release() {
        assert_eq!(Version::new(1, 0, 0).to_string(), "1.0.0");
    }

    #[test]
    fn test_display_drops_prefix_and_build() {
        let version: Version = "v0.1.0-alpha.0+build.7".parse().unwrap();
        assert_eq!(version.to_string(), "0.1.0-alpha.0");
    }

    #[test]
    fn test_accessors() {
        let version: Version = "3.14.15-rc.2".parse().unwrap();
        assert_eq!(version.major(), 3);
        assert_eq!(version.minor(), 14);
        assert_eq!(version.patch(), 15);
        assert_eq!(version.triple(), (3, 14, 15));
        assert_eq!(version.prerelease(), Some("rc.2"));
        assert!(version.is_prerelease());

        let release = Version::new(3, 14, 15);
        assert_eq!(release.prerelease(), None);
        assert!(!release.is_prerelease());
    }

    #[test]
    fn test_equality_ignores_build_metadata() {
        let a: Version = "1.0.0-alpha+001".parse().unwrap();
        let b: Version = "1.0.0-alpha+002".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_includes_prerelease() {
        let a: Version = "1.0.0-alpha".parse().unwrap();
        let b: Version = "1.0.0-beta".parse().unwrap();
        assert_ne!(a, b);
        assert_ne!(a, Version::new(1, 0, 0));
    }

    #[test]
    fn test_serde_as_string() {
        let version: Version = "v2.3.0-rc.1".parse().unwrap();
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"2.3.0-rc.1\"");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, version);

        assert!(serde_json::from_str::<Version>("\"1.0\"").is_err());
    }

    #[test]
    fn test_into_semver() {
        let version: Version = "1.2.3-beta.2".parse().unwrap();
        let converted = semver::Version::try_from(&version).unwrap();
        assert_eq!(converted.to_string(), "1.2.3-beta.2");

        let release = semver::Version::try_from(&Version::new(4, 5, 6)).unwrap();
        assert_eq!(release, semver::Version::new(4, 5, 6));
    }
}

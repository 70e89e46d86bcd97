//! Reducing a list of version strings to the newest one.

use super::comparator::{Comparator, DEFAULT_COMPARATOR};
use super::relation::Relation;
use crate::error::ParseError;

impl Comparator {
    /// Return the greatest of `versions`, exactly as it was written.
    ///
    /// The accumulator starts at the configured seed (`0.0.0` by default)
    /// and is only replaced by a strictly greater candidate, so among equal
    /// versions the earliest wins. The first unparseable entry aborts the
    /// reduction.
    pub fn greatest<I, S>(&self, versions: I) -> Result<String, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut greatest = self.seed.clone();
        for candidate in versions {
            let candidate = candidate.as_ref();
            if self.relationship_from_strings(candidate, &greatest)? == Relation::Greater {
                tracing::debug!(candidate, previous = %greatest, "new greatest version");
                greatest = candidate.to_string();
            }
        }
        Ok(greatest)
    }
}

/// Greatest of `versions` under the default configuration.
pub fn greatest_version<I, S>(versions: I) -> Result<String, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_COMPARATOR.greatest(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompareConfig;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_greatest_preserves_verbatim_form() {
        let tags = ["4.4.3", "v8.12.4", "0.1.0", "7.3.3", "4.67.31"];
        assert_eq!(greatest_version(tags).unwrap(), "v8.12.4");
    }

    #[test]
    fn test_greatest_keeps_suffixes() {
        let tags = ["1.0.0", "v2.0.0-rc.1+build.9", "1.9.9"];
        assert_eq!(greatest_version(tags).unwrap(), "v2.0.0-rc.1+build.9");
    }

    #[test]
    fn test_greatest_empty_is_seed() {
        assert_eq!(greatest_version(Vec::<String>::new()).unwrap(), "0.0.0");
    }

    #[test]
    fn test_greatest_first_of_equals_wins() {
        let tags = ["v1.0.0", "1.0.0", "1.0.0-alpha"];
        assert_eq!(greatest_version(tags).unwrap(), "v1.0.0");
    }

    #[test]
    fn test_greatest_zero_candidates_never_replace_seed() {
        assert_eq!(greatest_version(["v0.0.0", "0.0.0-rc"]).unwrap(), "0.0.0");
    }

    #[test]
    fn test_greatest_fails_fast() {
        let err = greatest_version(["1.0.0", "not-a-version", "2.0.0"]).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidFormat);
        assert_eq!(err.input(), "not-a-version");
    }

    #[test]
    fn test_greatest_with_custom_seed() {
        let comparator = Comparator::new(&CompareConfig {
            seed: "1.0.0".to_string(),
            ..CompareConfig::default()
        });
        assert_eq!(comparator.greatest(["0.9.0", "0.5.0"]).unwrap(), "1.0.0");
        assert_eq!(comparator.greatest(["0.9.0", "1.0.1"]).unwrap(), "1.0.1");
    }

    #[test]
    fn test_greatest_accepts_owned_strings() {
        let tags: Vec<String> = vec!["0.37.1".into(), "0.37.10".into(), "0.37.9".into()];
        assert_eq!(greatest_version(&tags).unwrap(), "0.37.10");
    }
}

//! The three-valued outcome of comparing two versions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How the left-hand version relates to the right-hand one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// Newer
    Greater,
    /// Older
    Lower,
    /// Same position in the ordering
    Equal,
}

impl Relation {
    /// The relation seen from the other side.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Greater => Self::Lower,
            Self::Lower => Self::Greater,
            Self::Equal => Self::Equal,
        }
    }

    #[must_use]
    pub const fn to_ordering(self) -> Ordering {
        match self {
            Self::Greater => Ordering::Greater,
            Self::Lower => Ordering::Less,
            Self::Equal => Ordering::Equal,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Greater => "Greater",
            Self::Lower => "Lower",
            Self::Equal => "Equal",
        }
    }
}

impl From<Ordering> for Relation {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Greater,
            Ordering::Less => Self::Lower,
            Ordering::Equal => Self::Equal,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Comparing versions and picking the greatest of a set.
//!
//! Ordering looks only at `major.minor.patch`. What happens when two
//! versions share a triple but carry different prereleases is decided by
//! [`PrereleaseOrdering`]; by default they are `Equal`.

mod comparator;
mod greatest;
mod relation;

pub use comparator::{relationship, relationship_from_strings, Comparator, PrereleaseOrdering};
pub use greatest::greatest_version;
pub use relation::Relation;

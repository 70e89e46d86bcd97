//! Validating and parsing semantic version strings.

mod grammar;
mod model;
mod parse;

pub use grammar::{is_valid, is_valid_with, PrefixPolicy};
pub use model::Version;
pub use parse::{parse, parse_with, Parser};

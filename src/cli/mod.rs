//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. Each writes its result to the
//! given writer and returns the process exit code; the caller is
//! responsible for calling `std::process::exit()` with it.

mod compare;
mod config;
mod greatest;
mod resolve;
mod validate;

pub use compare::run_compare;
pub use config::{run_config, ConfigOutput};
pub use greatest::{read_versions, run_greatest};
pub use resolve::resolve_config;
pub use validate::run_validate;

/// Exit codes shared by all subcommands.
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// At least one input was not a valid version (`validate` only)
    pub const INVALID_INPUT: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

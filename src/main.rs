//! semvercomp: validate and compare semantic version tags
//!
//! Thin command-line front end over the `semvercomp` library, meant for
//! release scripts such as `git tag | semvercomp greatest`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use semvercomp::{
    cli::{self, exit_codes, ConfigOutput},
    config::{CliOverrides, OutputFormat},
    Comparator, PrefixPolicy,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "semvercomp")]
#[command(version, about = "Validate and compare semantic version tags", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  At least one input is not a valid version (validate)
    2  Error occurred

EXAMPLES:
    # Newest tag of the current repository
    git tag | semvercomp greatest

    # Compare two versions
    semvercomp compare v1.4.0 1.10.0

    # Accept V-prefixed tags as well
    semvercomp --allow-uppercase-prefix greatest V2.0.0 v1.9.3")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "SEMVERCOMP_CONFIG")]
    config: Option<PathBuf>,

    /// Configuration preset (default, lenient, strict)
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Accept an uppercase `V` prefix in addition to `v`
    #[arg(long, global = true)]
    allow_uppercase_prefix: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print how the first version relates to the second (Greater, Lower, Equal)
    Compare {
        a: String,
        b: String,
    },

    /// Print the greatest version exactly as given; reads stdin when no versions are passed
    Greatest {
        versions: Vec<String>,
    },

    /// Check that each input is a valid semantic version
    Validate {
        #[arg(required = true)]
        versions: Vec<String>,
    },

    /// Print an example configuration file or its JSON Schema
    Config {
        /// Include every option with comments
        #[arg(long, conflicts_with = "schema")]
        full: bool,

        /// Print the JSON Schema instead
        #[arg(long)]
        schema: bool,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            prefix: self.allow_uppercase_prefix.then_some(PrefixPolicy::AnyCase),
            format: self.format,
            quiet: self.quiet,
        }
    }
}

fn run(args: Cli) -> Result<i32> {
    let config = cli::resolve_config(
        args.preset.as_deref(),
        args.config.as_deref(),
        &args.overrides(),
    )?;
    let format = config.output.format;
    let quiet = config.output.quiet;
    let comparator = || Comparator::from_config(&config.compare);
    let mut stdout = io::stdout().lock();

    match args.command {
        Commands::Compare { a, b } => cli::run_compare(&comparator()?, &a, &b, format, &mut stdout),
        Commands::Greatest { versions } => {
            let comparator = comparator()?;
            let versions = if versions.is_empty() {
                if !quiet && io::stdin().is_terminal() {
                    tracing::info!("Reading versions from stdin, one per line");
                }
                cli::read_versions(io::stdin().lock()).context("Failed to read stdin")?
            } else {
                versions
            };
            cli::run_greatest(&comparator, &versions, format, &mut stdout)
        }
        Commands::Validate { versions } => {
            cli::run_validate(&comparator()?, &versions, format, quiet, &mut stdout)
        }
        // No comparator: a config with a bad seed must not block printing the schema
        Commands::Config { full, schema } => {
            let output = if schema {
                ConfigOutput::Schema
            } else if full {
                ConfigOutput::Full
            } else {
                ConfigOutput::Example
            };
            cli::run_config(output, &mut stdout)
        }
    }
}

fn main() {
    let args = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let log_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

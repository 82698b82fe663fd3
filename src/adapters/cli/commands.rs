//! CLI Argument Parsing
//!
//! Explicit option schema for the QuantumTrader entry point. Unknown flags are
//! rejected by clap with a usage error instead of being passed through.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// QuantumTrader - command-line entry point
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "quantum-trader",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Run the QuantumTrader application once",
    long_about = "Parses the command line, builds QuantumTrader with the requested \
                  verbosity and runs it. A failed run prints the error and exits with status 1."
)]
pub struct ParsedArgs {
    /// Enable verbose output (forwarded to the application)
    #[arg(short, long)]
    pub verbose: bool,

    /// Input file (parsed, not forwarded to the application)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Output file (parsed, not forwarded to the application)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}

impl ParsedArgs {
    /// Parse an argument list that excludes the program name
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv = std::iter::once(OsString::from("quantum-trader"))
            .chain(args.into_iter().map(Into::into));
        Self::try_parse_from(argv)
    }

    /// Input path with `~` expanded
    pub fn input_path(&self) -> Option<PathBuf> {
        self.input.as_deref().map(expand_path)
    }

    /// Output path with `~` expanded
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output.as_deref().map(expand_path)
    }

    /// Configuration file path with `~` expanded
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.as_deref().map(expand_path)
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

/// Most verbose of the flag level and `fallback_level`.
///
/// `--debug` selects debug, verbose selects info. An unparseable
/// `fallback_level` counts as warn.
pub fn effective_level(verbose: bool, debug: bool, fallback_level: &str) -> LevelFilter {
    let flag_level = if debug {
        LevelFilter::DEBUG
    } else if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let file_level = fallback_level.parse().unwrap_or(LevelFilter::WARN);

    flag_level.max(file_level)
}

/// Initialize logging system.
///
/// Level comes from `effective_level`; `RUST_LOG` overrides it. Safe to call
/// more than once.
pub fn init_logging(verbose: bool, debug: bool, fallback_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = effective_level(verbose, debug, fallback_level);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    if fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }

    Ok(())
}

//! CLI Adapter
//!
//! Command-line interface for QuantumTrader.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{effective_level, init_logging, ParsedArgs};

/// Parse the process arguments, exiting with a usage error on bad input
pub fn init() -> ParsedArgs {
    use clap::Parser;
    ParsedArgs::parse()
}

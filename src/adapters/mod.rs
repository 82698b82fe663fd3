//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - CLI: Command-line parsing and logging setup
//! - Process: stderr reporting and process exit

pub mod cli;
pub mod process;

pub use cli::ParsedArgs;
pub use process::StdProcess;

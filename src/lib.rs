//! QuantumTrader - Command-line bootstrapper library
//!
//! Parses the command line, builds the QuantumTrader application and runs it
//! once, mapping a failed run to a diagnostic and exit status 1.
//!
//! # Modules
//!
//! - `domain`: Core types (RunState, exit statuses)
//! - `ports`: Trait abstractions (Application, ApplicationFactory, ProcessController)
//! - `adapters`: External implementations (CLI parsing, logging, process exit)
//! - `config`: Optional configuration file loading and validation
//! - `application`: Bootstrapper and the stock QuantumTrader

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;

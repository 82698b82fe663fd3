//! Configuration Module
//!
//! Loads and validates the optional configuration file.

pub mod loader;

pub use loader::{load_config, ConfigError, FileConfig, VERBOSE_ENV};

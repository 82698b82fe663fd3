//! Domain Layer - Core types for the QuantumTrader bootstrapper
//!
//! Pure types with no external dependencies. Side effects happen through
//! the ports layer.

pub mod run_state;

pub use run_state::{RunState, EXIT_FAILURE, EXIT_SUCCESS};

//! Ports Layer - Trait definitions for the bootstrapper's collaborators
//!
//! Following hexagonal architecture, these traits abstract:
//! - The trading application (construction + one asynchronous run)
//! - Process termination and diagnostic output

pub mod application;
pub mod process;
pub mod mocks;

pub use application::{AppConfig, Application, ApplicationFactory};
pub use process::ProcessController;

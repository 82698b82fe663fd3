//! Standard process controller
//!
//! Real implementation of the process port: writes to stderr and exits.

use crate::domain::EXIT_FAILURE;
use crate::ports::ProcessController;

/// Controls the running OS process
#[derive(Debug, Clone, Copy, Default)]
pub struct StdProcess;

impl ProcessController for StdProcess {
    fn fail(&self, err: &anyhow::Error) {
        eprintln!("{:?}", err);
        std::process::exit(EXIT_FAILURE);
    }
}

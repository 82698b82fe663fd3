//! Bootstrapper
//!
//! Turns one process invocation into one application run:
//! parse result -> `AppConfig` -> construct -> `execute` -> settle.
//! A failed run is reported through the process port and ends with status 1.

use crate::adapters::cli::ParsedArgs;
use crate::config::FileConfig;
use crate::domain::RunState;
use crate::ports::{AppConfig, Application, ApplicationFactory, ProcessController};

impl From<&ParsedArgs> for AppConfig {
    fn from(args: &ParsedArgs) -> Self {
        AppConfig {
            verbose: args.verbose,
        }
    }
}

/// Drives a single application run
pub struct Bootstrapper<P: ProcessController> {
    process: P,
    file_config: FileConfig,
}

impl<P: ProcessController> Bootstrapper<P> {
    pub fn new(process: P) -> Self {
        Self {
            process,
            file_config: FileConfig::default(),
        }
    }

    /// Use settings loaded from a configuration file
    pub fn with_file_config(mut self, file_config: FileConfig) -> Self {
        self.file_config = file_config;
        self
    }

    /// Configuration forwarded to the application.
    ///
    /// Verbose is on when the flag or the configuration file enables it.
    /// `input` and `output` are never forwarded.
    pub fn app_config(&self, args: &ParsedArgs) -> AppConfig {
        let mut config = AppConfig::from(args);
        config.verbose |= self.file_config.app.verbose;
        config
    }

    /// Construct the application and run it exactly once.
    ///
    /// On failure the error goes to the process controller, which terminates
    /// the process with status 1. Success writes nothing.
    pub async fn run<F>(&self, args: &ParsedArgs, factory: &F) -> RunState
    where
        F: ApplicationFactory,
    {
        log_unforwarded("input", args.input_path());
        log_unforwarded("output", args.output_path());

        let config = self.app_config(args);
        let app = factory.create(config);
        tracing::debug!(?config, "Application constructed");

        let state = RunState::Running;
        match app.execute().await {
            Ok(()) => {
                tracing::debug!("Application run completed");
                state.settle(true)
            }
            Err(e) => {
                let state = state.settle(false);
                self.process.fail(&e);
                state
            }
        }
    }
}

fn log_unforwarded(flag: &str, path: Option<std::path::PathBuf>) {
    if let Some(path) = path {
        tracing::debug!(
            "--{} {} is parsed but not forwarded to the application",
            flag,
            path.display()
        );
    }
}

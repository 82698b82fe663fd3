//! QuantumTrader - command-line entry point
//!
//! Runs the QuantumTrader application once. A failed run prints the error to
//! stderr and exits with status 1.

use anyhow::{Context, Result};

use quantum_trader::adapters::cli::{self, init_logging};
use quantum_trader::adapters::StdProcess;
use quantum_trader::application::{Bootstrapper, QuantumTrader};
use quantum_trader::config::{load_config, FileConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let args = cli::init();

    let file_config = match args.config_path() {
        Some(path) => load_config(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => FileConfig::default(),
    }
    .with_env_overrides();

    let bootstrapper = Bootstrapper::new(StdProcess).with_file_config(file_config.clone());
    let app_config = bootstrapper.app_config(&args);
    init_logging(app_config.verbose, args.debug, &file_config.logging.level)?;

    let state = bootstrapper.run(&args, &QuantumTrader::new).await;
    tracing::debug!("{}", state.description());

    Ok(())
}

//! QuantumTrader
//!
//! Stock application built by the binary. Its trading behavior lives outside
//! this crate; this type only honors the construction and run contract.

use anyhow::Result;
use async_trait::async_trait;

use crate::ports::{AppConfig, Application};

/// The QuantumTrader application
#[derive(Debug, Clone)]
pub struct QuantumTrader {
    config: AppConfig,
}

impl QuantumTrader {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> AppConfig {
        self.config
    }
}

#[async_trait]
impl Application for QuantumTrader {
    async fn execute(&self) -> Result<()> {
        tracing::debug!(verbose = self.config.verbose, "QuantumTrader starting");
        tracing::debug!("QuantumTrader finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_config() {
        let trader = QuantumTrader::new(AppConfig { verbose: true });
        assert!(trader.config().verbose);
    }

    #[test]
    fn test_execute_succeeds() {
        let trader = QuantumTrader::new(AppConfig::default());
        assert!(tokio_test::block_on(trader.execute()).is_ok());
    }

    #[test]
    fn test_execute_is_repeatable() {
        let trader = QuantumTrader::new(AppConfig { verbose: true });
        tokio_test::block_on(async {
            assert!(trader.execute().await.is_ok());
            assert!(trader.execute().await.is_ok());
        });
    }
}

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Configuration handed to the application at construction.
///
/// Only `verbose` is forwarded from the command line; `--input` and
/// `--output` stay with the bootstrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub verbose: bool,
}

/// The trading application driven by the bootstrapper.
///
/// Its internal behavior is opaque to the caller: `execute` is invoked once,
/// with no arguments, and either completes or fails with an arbitrary error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Application: Send + Sync {
    async fn execute(&self) -> Result<()>;
}

/// Builds an application from its configuration
pub trait ApplicationFactory {
    type App: Application;

    fn create(&self, config: AppConfig) -> Self::App;
}

impl<F, A> ApplicationFactory for F
where
    F: Fn(AppConfig) -> A,
    A: Application,
{
    type App = A;

    fn create(&self, config: AppConfig) -> A {
        self(config)
    }
}

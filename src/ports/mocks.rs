use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use super::{Application, ProcessController};
use crate::domain::EXIT_FAILURE;

/// Mock process controller that records failures instead of exiting
#[derive(Debug, Clone, Default)]
pub struct RecordingProcess {
    reports: Arc<Mutex<Vec<String>>>,
    exit_codes: Arc<Mutex<Vec<i32>>>,
}

impl RecordingProcess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostic output written so far, one entry per failure
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }

    /// Exit statuses requested so far
    pub fn exit_codes(&self) -> Vec<i32> {
        self.exit_codes.lock().unwrap().clone()
    }
}

impl ProcessController for RecordingProcess {
    fn fail(&self, err: &anyhow::Error) {
        self.reports.lock().unwrap().push(format!("{:?}", err));
        self.exit_codes.lock().unwrap().push(EXIT_FAILURE);
    }
}

/// Mock application with a scripted outcome that counts `execute` calls
#[derive(Debug, Clone, Default)]
pub struct ScriptedApplication {
    calls: Arc<AtomicUsize>,
    failure: Option<String>,
}

impl ScriptedApplication {
    /// Application whose run succeeds
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Application whose run fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    /// Number of times `execute` has been invoked on this app or its clones
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Application for ScriptedApplication {
    async fn execute(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}

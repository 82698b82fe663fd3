//! Run State
//!
//! Lifecycle of a single application run. A process enters `Running` once and
//! settles into exactly one terminal state; there is no restart and no retry.

/// Process exit status for a run that completed normally
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status for a run whose `execute` failed
pub const EXIT_FAILURE: i32 = 1;

/// Lifecycle state of the bootstrapped application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// `execute` has been invoked and has not settled yet
    #[default]
    Running,
    /// `execute` completed successfully
    Succeeded,
    /// `execute` returned an error
    Failed,
}

impl RunState {
    /// Settle a running state with the outcome of `execute`.
    ///
    /// Terminal states are sticky: settling them again returns them unchanged.
    pub fn settle(self, succeeded: bool) -> Self {
        match self {
            RunState::Running if succeeded => RunState::Succeeded,
            RunState::Running => RunState::Failed,
            terminal => terminal,
        }
    }

    /// Returns true once the run has settled
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running)
    }

    /// Exit status the process should end with, if the run has settled
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunState::Running => None,
            RunState::Succeeded => Some(EXIT_SUCCESS),
            RunState::Failed => Some(EXIT_FAILURE),
        }
    }

    /// Returns a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            RunState::Running => "Application running",
            RunState::Succeeded => "Application finished",
            RunState::Failed => "Application failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_running() {
        let state = RunState::default();
        assert_eq!(state, RunState::Running);
        assert!(!state.is_terminal());
        assert_eq!(state.exit_code(), None);
    }

    #[test]
    fn test_settle_success() {
        let state = RunState::Running.settle(true);
        assert_eq!(state, RunState::Succeeded);
        assert!(state.is_terminal());
        assert_eq!(state.exit_code(), Some(EXIT_SUCCESS));
    }

    #[test]
    fn test_settle_failure() {
        let state = RunState::Running.settle(false);
        assert_eq!(state, RunState::Failed);
        assert_eq!(state.exit_code(), Some(1));
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        assert_eq!(RunState::Succeeded.settle(false), RunState::Succeeded);
        assert_eq!(RunState::Failed.settle(true), RunState::Failed);
    }

    #[test]
    fn test_descriptions_differ() {
        assert_ne!(
            RunState::Succeeded.description(),
            RunState::Failed.description()
        );
    }
}

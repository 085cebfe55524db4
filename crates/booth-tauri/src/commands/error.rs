use booth_core::{flow::FlowError, launcher::LaunchError};
use serde::Serialize;

/// Error returned to the frontend by every booth command.
///
/// `code` is stable and meant for branching in the views; `message` is for
/// logs and operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct CommandError {
    pub code: String,
    pub message: String,
}

impl CommandError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unsupported(what: &str) -> Self {
        Self::new("unsupported", format!("{what} is not available on this platform"))
    }
}

impl From<LaunchError> for CommandError {
    fn from(err: LaunchError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

impl From<FlowError> for CommandError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::TransitionRejected { .. } => Self::new("transition_rejected", err.to_string()),
        }
    }
}

/// Centralized mapping for infrastructure errors.
pub fn map_err(err: anyhow::Error) -> CommandError {
    CommandError::new("internal", format!("{err:#}"))
}

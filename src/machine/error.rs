//! Errors raised while running a context.

use thiserror::Error;

/// Errors that can occur during `change_state` or `execute_state`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("State {state} is not registered in this context")]
    UnknownState { state: String },

    #[error("Handler for state {state} failed: {message}")]
    HandlerFailed { state: String, message: String },
}

//! Build errors for context builders.

use crate::machine::TransitionError;
use thiserror::Error;

/// Errors that can occur when building a context.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No states registered. Call .state(identity, handler) before .build()")]
    NoStates,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State {state} registered more than once")]
    DuplicateState { state: String },

    #[error("Initial state {state} is not registered")]
    UnregisteredInitialState { state: String },

    #[error("Initial state failed to enter: {0}")]
    InitialEnter(#[from] TransitionError),
}

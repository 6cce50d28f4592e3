//! Builder for constructing contexts.

use crate::builder::error::BuildError;
use crate::core::{State, StateHandler};
use crate::machine::{Context, SharedHandler};
use std::sync::Arc;

/// Builder for constructing contexts with a fluent API.
///
/// States are kept in registration order. `build` validates the registry,
/// then enters the initial state so the returned context is never without
/// a current state.
pub struct ContextBuilder<S: State + 'static, D> {
    data: D,
    initial: Option<S>,
    states: Vec<(S, SharedHandler<S, D>)>,
}

impl<S: State + 'static, D> ContextBuilder<S, D> {
    /// Create a new builder around the domain data.
    pub fn new(data: D) -> Self {
        Self {
            data,
            initial: None,
            states: Vec::new(),
        }
    }

    /// Register a state and its handler.
    pub fn state<H>(mut self, state: S, handler: H) -> Self
    where
        H: StateHandler<S, D> + 'static,
    {
        self.states.push((state, Arc::new(handler)));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the context.
    /// Returns an error if the registry is empty, ambiguous, or does not
    /// contain the initial state.
    pub fn build(self) -> Result<Context<S, D>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        for (i, (state, _)) in self.states.iter().enumerate() {
            if self.states[..i].iter().any(|(seen, _)| seen == state) {
                return Err(BuildError::DuplicateState {
                    state: state.name().to_string(),
                });
            }
        }

        let index = self
            .states
            .iter()
            .position(|(state, _)| *state == initial)
            .ok_or_else(|| BuildError::UnregisteredInitialState {
                state: initial.name().to_string(),
            })?;

        Ok(Context::start(self.states, index, self.data)?)
    }
}

impl<S: State + 'static, D: Default> Default for ContextBuilder<S, D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

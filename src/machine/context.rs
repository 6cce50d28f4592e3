//! Context that dispatches to the current state's handler.

use crate::core::{State, StateHandler, StateHistory, StateTransition};
use crate::machine::error::TransitionError;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};
use uuid::Uuid;

pub(crate) type SharedHandler<S, D> = Arc<dyn StateHandler<S, D>>;

/// Owner of the state registry, the current state and the domain data `D`.
///
/// The registry is fixed once built. `current` is an index into it and is
/// valid from construction on.
pub struct Context<S: State + 'static, D> {
    id: Uuid,
    states: Vec<(S, SharedHandler<S, D>)>,
    current: usize,
    data: D,
    history: StateHistory<S>,
    ticks: u64,
}

impl<S: State + 'static, D> Context<S, D> {
    /// Assemble a context and enter `initial`.
    ///
    /// Callers guarantee `initial < states.len()`.
    pub(crate) fn start(
        states: Vec<(S, SharedHandler<S, D>)>,
        initial: usize,
        data: D,
    ) -> Result<Self, TransitionError> {
        let mut context = Self {
            id: Uuid::new_v4(),
            states,
            current: initial,
            data,
            history: StateHistory::new(),
            ticks: 0,
        };

        let to = context.states[initial].0.clone();
        debug!(context = %context.id, state = to.name(), "entering initial state");
        context.history.record(StateTransition {
            from: None,
            to,
            tick: 0,
            timestamp: Utc::now(),
        });
        context.enter_current()?;

        Ok(context)
    }

    /// Make `state` current and run its `enter` hook.
    ///
    /// Entering the state that is already current still runs `enter`.
    /// Safe to call from inside a handler's `execute`; the new state is
    /// fully entered before this returns.
    pub fn change_state(&mut self, state: &S) -> Result<(), TransitionError> {
        let index = self
            .position(state)
            .ok_or_else(|| TransitionError::UnknownState {
                state: state.name().to_string(),
            })?;

        let from = self.current_state().clone();
        self.current = index;
        let to = self.current_state().clone();

        debug!(
            context = %self.id,
            from = from.name(),
            to = to.name(),
            tick = self.ticks,
            "state changed"
        );
        self.history.record(StateTransition {
            from: Some(from),
            to,
            tick: self.ticks,
            timestamp: Utc::now(),
        });

        self.enter_current()
    }

    /// Run one tick: call `execute` on the current state's handler.
    pub fn execute_state(&mut self) -> Result<(), TransitionError> {
        self.ticks += 1;
        let handler = Arc::clone(&self.states[self.current].1);
        trace!(
            context = %self.id,
            state = self.current_state().name(),
            tick = self.ticks,
            "executing state"
        );
        handler.execute(self)
    }

    fn enter_current(&mut self) -> Result<(), TransitionError> {
        let handler = Arc::clone(&self.states[self.current].1);
        handler.enter(self)
    }

    fn position(&self, state: &S) -> Option<usize> {
        self.states.iter().position(|(s, _)| s == state)
    }

    /// Identity of the current state.
    pub fn current_state(&self) -> &S {
        &self.states[self.current].0
    }

    /// Registered state identities, in registration order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.states.iter().map(|(s, _)| s)
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Number of `execute_state` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Per-instance identifier used to correlate log events.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl<S: State + 'static, D: fmt::Debug> fmt::Debug for Context<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("current", self.current_state())
            .field("data", &self.data)
            .field("ticks", &self.ticks)
            .finish()
    }
}

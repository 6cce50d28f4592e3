//! State transition history tracking.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// `from` is `None` for the entry into the initial state.
///
/// # Example
///
/// ```rust
/// use pendulum::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Dark,
///     Lit,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Dark => "Dark",
///             Self::Lit => "Lit",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Some(Lamp::Dark),
///     to: Lamp::Lit,
///     tick: 3,
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_reentry());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left, if any
    pub from: Option<S>,
    /// The state being entered
    pub to: S,
    /// Tick during which the change happened (0 = before the first tick)
    pub tick: u64,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// True when a state was entered again while already current.
    pub fn is_reentry(&self) -> bool {
        self.from.as_ref() == Some(&self.to)
    }
}

/// Ordered history of state changes for one context.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Starts with the `from` of the first record when there is one, then
    /// lists the `to` of every record in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pendulum::core::{State, StateHistory, StateTransition};
    /// use serde::{Deserialize, Serialize};
    /// use chrono::Utc;
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Phase { One, Two }
    ///
    /// impl State for Phase {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::One => "One",
    ///             Self::Two => "Two",
    ///         }
    ///     }
    /// }
    ///
    /// let mut history = StateHistory::new();
    /// history.record(StateTransition { from: None, to: Phase::One, tick: 0, timestamp: Utc::now() });
    /// history.record(StateTransition { from: Some(Phase::One), to: Phase::Two, tick: 4, timestamp: Utc::now() });
    ///
    /// assert_eq!(history.get_path(), vec![&Phase::One, &Phase::Two]);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(from) = self.transitions.first().and_then(|t| t.from.as_ref()) {
            path.push(from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Left,
        Right,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Left => "Left",
                Self::Right => "Right",
            }
        }
    }

    fn transition(from: Option<TestState>, to: TestState, tick: u64) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            tick,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = StateHistory::new();
        history.record(transition(None, TestState::Left, 0));
        history.record(transition(Some(TestState::Left), TestState::Right, 5));

        assert_eq!(history.transitions().len(), 2);
        assert_eq!(history.last().unwrap().tick, 5);
    }

    #[test]
    fn get_path_starts_at_initial_entry() {
        let mut history = StateHistory::new();
        history.record(transition(None, TestState::Left, 0));
        history.record(transition(Some(TestState::Left), TestState::Right, 5));
        history.record(transition(Some(TestState::Right), TestState::Left, 15));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![&TestState::Left, &TestState::Right, &TestState::Left]
        );
    }

    #[test]
    fn get_path_includes_from_of_first_record() {
        let mut history = StateHistory::new();
        history.record(transition(Some(TestState::Right), TestState::Left, 1));

        assert_eq!(history.get_path(), vec![&TestState::Right, &TestState::Left]);
    }

    #[test]
    fn reentry_is_detected() {
        assert!(transition(Some(TestState::Left), TestState::Left, 2).is_reentry());
        assert!(!transition(None, TestState::Left, 0).is_reentry());
        assert!(!transition(Some(TestState::Left), TestState::Right, 5).is_reentry());
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut history = StateHistory::new();
        history.record(transition(None, TestState::Left, 0));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(transition(None, TestState::Left, 0));
        history.record(transition(Some(TestState::Left), TestState::Right, 5));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.get_path(), history.get_path());
    }
}

//! State identities.
//!
//! A `State` names one entry in a context's registry. It carries no
//! behavior of its own; behavior lives in [`StateHandler`](super::StateHandler).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Identity of a registered state.
///
/// # Required Traits
///
/// - `Clone`: identities are copied into history records
/// - `PartialEq`: the registry looks handlers up by identity
/// - `Debug`: identities show up in errors and logs
/// - `Serialize` + `Deserialize`: history can be exported
///
/// # Example
///
/// ```rust
/// use pendulum::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Walking,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Walking => "Walking",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Walking.name(), "Walking");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Walking;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Idle, TestState::Idle.clone());
        assert_ne!(TestState::Idle, TestState::Walking);
    }
}

//! Core state types.
//!
//! This module contains the building blocks shared by every context:
//! - State identities via the `State` trait
//! - State behavior via the `StateHandler` trait
//! - Transition history tracking

mod handler;
mod history;
mod state;

pub use handler::StateHandler;
pub use history::{StateHistory, StateTransition};
pub use state::State;

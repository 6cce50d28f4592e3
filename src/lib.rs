//! Pendulum: a registry-based State pattern
//!
//! A context owns a fixed registry of states and a pointer to the current
//! one. Each tick runs the current state's handler, which may mutate the
//! context's domain data and switch the context to another state. The
//! switch, including the new state's `enter` hook, finishes before the tick
//! returns.
//!
//! # Core Concepts
//!
//! - **State**: a serializable identity naming a registry entry
//! - **StateHandler**: `enter`/`execute` behavior bound to the concrete context type
//! - **Context**: registry, current state, domain data and history
//! - **Character**: a context that swings left and right between two limits
//!
//! # Example
//!
//! ```rust
//! use pendulum::character::{Character, Direction};
//!
//! let mut character = Character::new();
//! for _ in 0..20 {
//!     character.execute_state().unwrap();
//! }
//!
//! assert_eq!(character.pos_x(), 0);
//! assert_eq!(character.current_state(), Direction::Left);
//! ```

pub mod builder;
pub mod character;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ContextBuilder};
pub use character::{Character, Direction};
pub use self::core::{State, StateHandler, StateHistory, StateTransition};
pub use machine::{Context, TransitionError};

//! The runtime side of the pattern: a context that owns a fixed registry
//! of states, the current state, and the domain data handlers act on.
//!
//! Contexts are only created through
//! [`ContextBuilder`](crate::builder::ContextBuilder), which guarantees the
//! current state always refers to a registered entry.

mod context;
mod error;

pub use context::Context;
pub(crate) use context::SharedHandler;
pub use error::TransitionError;

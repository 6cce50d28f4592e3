//! Builder API for context construction.
//!
//! This module provides a fluent builder that validates a state registry
//! before handing out a running context, plus a macro for declaring
//! state identities with minimal boilerplate.

pub mod context;
pub mod error;
pub mod macros;

pub use context::ContextBuilder;
pub use error::BuildError;

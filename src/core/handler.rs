//! Behavior attached to a state.

use super::state::State;
use crate::machine::{Context, TransitionError};

/// Behavior run against a context while its state is active.
///
/// Handlers receive the concrete `Context<S, D>`, so they can read and
/// mutate the domain data `D` and request transitions without any cast.
/// A transition requested from `execute` completes (including the new
/// state's `enter`) before the surrounding `execute_state` call returns.
///
/// Handlers are shared behind an `Arc`, so any per-activation bookkeeping
/// must use interior mutability.
///
/// # Example
///
/// ```rust
/// use pendulum::builder::ContextBuilder;
/// use pendulum::core::StateHandler;
/// use pendulum::machine::{Context, TransitionError};
/// use pendulum::state_enum;
///
/// state_enum! {
///     enum Light {
///         Off,
///         On,
///     }
/// }
///
/// struct Toggle(Light);
///
/// impl StateHandler<Light, u32> for Toggle {
///     fn execute(&self, ctx: &mut Context<Light, u32>) -> Result<(), TransitionError> {
///         *ctx.data_mut() += 1;
///         ctx.change_state(&self.0)
///     }
/// }
///
/// let mut ctx = ContextBuilder::new(0u32)
///     .state(Light::Off, Toggle(Light::On))
///     .state(Light::On, Toggle(Light::Off))
///     .initial(Light::Off)
///     .build()
///     .unwrap();
///
/// ctx.execute_state().unwrap();
/// assert_eq!(ctx.current_state(), &Light::On);
/// assert_eq!(*ctx.data(), 1);
/// ```
pub trait StateHandler<S: State, D>: Send + Sync {
    /// Called right after this state becomes current.
    fn enter(&self, _ctx: &mut Context<S, D>) -> Result<(), TransitionError> {
        Ok(())
    }

    /// Called once per tick while this state is current.
    fn execute(&self, ctx: &mut Context<S, D>) -> Result<(), TransitionError>;
}

//! Left and right movement handlers.

use super::{Body, Direction};
use crate::core::StateHandler;
use crate::machine::{Context, TransitionError};
use tracing::trace;

/// Moves the character one step left per tick and turns at the left limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeftState;

/// Moves the character one step right per tick and turns at the right limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct RightState;

impl StateHandler<Direction, Body> for LeftState {
    fn execute(&self, ctx: &mut Context<Direction, Body>) -> Result<(), TransitionError> {
        let body = ctx.data_mut();
        body.pos_x = body.pos_x.saturating_sub(body.bounds.step);
        let (pos_x, turn) = (body.pos_x, body.bounds.reached_left(body.pos_x));

        println!("{}", Direction::Left.position_line(pos_x));
        trace!(pos_x, turn, "moved left");

        if turn {
            ctx.change_state(&Direction::Right)?;
        }
        Ok(())
    }
}

impl StateHandler<Direction, Body> for RightState {
    fn execute(&self, ctx: &mut Context<Direction, Body>) -> Result<(), TransitionError> {
        let body = ctx.data_mut();
        body.pos_x = body.pos_x.saturating_add(body.bounds.step);
        let (pos_x, turn) = (body.pos_x, body.bounds.reached_right(body.pos_x));

        println!("{}", Direction::Right.position_line(pos_x));
        trace!(pos_x, turn, "moved right");

        if turn {
            ctx.change_state(&Direction::Left)?;
        }
        Ok(())
    }
}

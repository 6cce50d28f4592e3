//! A character that swings between two turning points.
//!
//! `Character` is a [`Context`] over [`Direction`] identities and a [`Body`]
//! holding the position. It registers [`LeftState`] and [`RightState`] and
//! starts moving left from `pos_x = 0`.
//!
//! # Example
//!
//! ```rust
//! use pendulum::character::{Character, Direction};
//!
//! let mut character = Character::new();
//! for _ in 0..5 {
//!     character.execute_state().unwrap();
//! }
//!
//! assert_eq!(character.pos_x(), -5);
//! assert_eq!(character.current_state(), Direction::Right);
//! ```

mod bounds;
mod states;

pub use bounds::Bounds;
pub use states::{LeftState, RightState};

use crate::builder::ContextBuilder;
use crate::core::StateHistory;
use crate::machine::{Context, TransitionError};
use crate::state_enum;
use serde::{Deserialize, Serialize};

state_enum! {
    /// Direction a character is currently moving in.
    pub enum Direction {
        Left,
        Right,
    }
}

impl Direction {
    /// Label printed in front of the position.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "moving left",
            Self::Right => "moving right",
        }
    }

    /// Line reported after each step, e.g. `moving left: -1`.
    pub fn position_line(&self, pos_x: i32) -> String {
        format!("{}: {}", self.label(), pos_x)
    }
}

/// Domain data the direction handlers act on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub pos_x: i32,
    pub bounds: Bounds,
}

/// Concrete context: a body plus its left/right state registry.
#[derive(Debug)]
pub struct Character {
    context: Context<Direction, Body>,
}

impl Character {
    /// Character at `pos_x = 0` with default bounds, moving left.
    pub fn new() -> Self {
        Self::with_bounds(Bounds::default())
    }

    /// Character at `pos_x = 0` with custom bounds, moving left.
    pub fn with_bounds(bounds: Bounds) -> Self {
        let context = ContextBuilder::new(Body { pos_x: 0, bounds })
            .state(Direction::Left, LeftState)
            .state(Direction::Right, RightState)
            .initial(Direction::Left)
            .build()
            .expect("Character registry always contains its initial state");

        Self { context }
    }

    /// Run one tick in the current direction.
    pub fn execute_state(&mut self) -> Result<(), TransitionError> {
        self.context.execute_state()
    }

    pub fn change_state(&mut self, direction: Direction) -> Result<(), TransitionError> {
        self.context.change_state(&direction)
    }

    pub fn current_state(&self) -> Direction {
        *self.context.current_state()
    }

    pub fn pos_x(&self) -> i32 {
        self.context.data().pos_x
    }

    pub fn set_pos_x(&mut self, pos_x: i32) {
        self.context.data_mut().pos_x = pos_x;
    }

    pub fn bounds(&self) -> Bounds {
        self.context.data().bounds
    }

    pub fn history(&self) -> &StateHistory<Direction> {
        self.context.history()
    }

    pub fn context(&self) -> &Context<Direction, Body> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context<Direction, Body> {
        &mut self.context
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

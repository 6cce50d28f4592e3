//! Turning points and step size for a character.

use serde::{Deserialize, Serialize};

/// Limits a character swings between.
///
/// A character moving left turns once `pos_x <= left_limit`; moving right
/// it turns once `pos_x >= right_limit`. The comparisons are inclusive so
/// a step that jumps past a limit still turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left_limit: i32,
    pub right_limit: i32,
    pub step: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            left_limit: -5,
            right_limit: 5,
            step: 1,
        }
    }
}

impl Bounds {
    /// Whether `pos_x` is at or past the left turning point.
    pub fn reached_left(&self, pos_x: i32) -> bool {
        pos_x <= self.left_limit
    }

    /// Whether `pos_x` is at or past the right turning point.
    pub fn reached_right(&self, pos_x: i32) -> bool {
        pos_x >= self.right_limit
    }
}

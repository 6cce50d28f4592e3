//! Property-based tests for the character state machine.
//!
//! These tests use proptest to check the character against a plain
//! simulation across many tick counts and step sizes.

use pendulum::character::{Bounds, Character, Direction};
use proptest::prelude::*;

/// (direction after tick, pos_x after tick) for each tick.
fn simulate(bounds: Bounds, ticks: usize) -> Vec<(Direction, i32)> {
    let mut direction = Direction::Left;
    let mut pos_x = 0;
    let mut trace = Vec::with_capacity(ticks);

    for _ in 0..ticks {
        match direction {
            Direction::Left => {
                pos_x -= bounds.step;
                if pos_x <= bounds.left_limit {
                    direction = Direction::Right;
                }
            }
            Direction::Right => {
                pos_x += bounds.step;
                if pos_x >= bounds.right_limit {
                    direction = Direction::Left;
                }
            }
        }
        trace.push((direction, pos_x));
    }
    trace
}

fn run(character: &mut Character, ticks: usize) -> Vec<(Direction, i32)> {
    (0..ticks)
        .map(|_| {
            character.execute_state().unwrap();
            (character.current_state(), character.pos_x())
        })
        .collect()
}

prop_compose! {
    fn arbitrary_bounds()(
        left in -20..0i32,
        right in 1..20i32,
        step in 1..8i32,
    ) -> Bounds {
        Bounds { left_limit: left, right_limit: right, step }
    }
}

proptest! {
    #[test]
    fn trace_matches_simulation(ticks in 0..200usize) {
        let mut character = Character::new();
        let trace = run(&mut character, ticks);

        prop_assert_eq!(trace, simulate(Bounds::default(), ticks));
        prop_assert_eq!(character.context().ticks(), ticks as u64);
    }

    #[test]
    fn trace_matches_simulation_for_any_bounds(
        bounds in arbitrary_bounds(),
        ticks in 0..100usize,
    ) {
        let mut character = Character::with_bounds(bounds);
        let trace = run(&mut character, ticks);

        prop_assert_eq!(trace, simulate(bounds, ticks));
    }

    #[test]
    fn unit_step_stays_within_limits(ticks in 0..200usize) {
        let mut character = Character::new();

        for (_, pos_x) in run(&mut character, ticks) {
            prop_assert!((-5..=5).contains(&pos_x));
        }
    }

    #[test]
    fn history_records_every_turn(ticks in 0..200usize) {
        let mut character = Character::new();
        let trace = run(&mut character, ticks);

        let mut previous = Direction::Left;
        let mut turns = 0;
        for (direction, _) in &trace {
            if *direction != previous {
                turns += 1;
                previous = *direction;
            }
        }

        // One entry for the initial state plus one per turn.
        prop_assert_eq!(character.history().transitions().len(), turns + 1);
    }

    #[test]
    fn characters_do_not_share_state(a_ticks in 0..50usize, b_ticks in 0..50usize) {
        let mut a = Character::new();
        let mut b = Character::new();

        run(&mut a, a_ticks);
        run(&mut b, b_ticks);

        let expected_a = simulate(Bounds::default(), a_ticks).last().map_or(0, |(_, p)| *p);
        let expected_b = simulate(Bounds::default(), b_ticks).last().map_or(0, |(_, p)| *p);
        prop_assert_eq!(a.pos_x(), expected_a);
        prop_assert_eq!(b.pos_x(), expected_b);
    }
}

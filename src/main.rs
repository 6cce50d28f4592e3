//! Runs a character for a fixed number of ticks, printing its position
//! after each one.
//!
//! Set `RUST_LOG=pendulum=debug` to see state changes on stderr.

use anyhow::Result;
use pendulum::Character;
use tracing::info;
use tracing_subscriber::EnvFilter;

const TICKS: usize = 20;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut character = Character::new();
    info!(context = %character.context().id(), ticks = TICKS, "starting");

    for _ in 0..TICKS {
        character.execute_state()?;
    }

    info!(
        pos_x = character.pos_x(),
        state = ?character.current_state(),
        transitions = character.history().transitions().len(),
        "finished"
    );
    Ok(())
}

//! Plays a game to the end with uniformly random untried shots.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::GameError;
use crate::coord::Coord;
use crate::game::{GameEngine, PlayerId};

/// Pick a random cell `player` has not fired at yet.
pub fn random_target<R: Rng>(
    engine: &GameEngine,
    player: PlayerId,
    rng: &mut R,
) -> Result<Coord, GameError> {
    let open: Vec<Coord> = engine.tracking(player).untried().collect();
    if open.is_empty() {
        return Err(GameError::NoTargetsLeft);
    }
    Ok(open[rng.random_range(0..open.len())])
}

/// Alternate random shots for whichever player is on turn until the game
/// ends, and return the winner. The engine must already be set up.
pub fn play_out<R: Rng>(engine: &mut GameEngine, rng: &mut R) -> Result<PlayerId, GameError> {
    loop {
        if let Some(winner) = engine.winner() {
            return Ok(winner);
        }
        let shooter = engine.active_player().ok_or(GameError::NotStarted)?;
        let target = random_target(engine, shooter, rng)?;
        engine.apply_attack(shooter, target)?;
    }
}

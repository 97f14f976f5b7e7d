//! A player's record of their own shots against the opponent.

use crate::common::{AttackResult, GameError, TrackCell};
use crate::config::BB;
use crate::coord::Coord;

/// Outcomes of one player's attacks, as seen by that player. Independent of
/// the opponent's real board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackingGrid {
    hits: BB,
    misses: BB,
}

impl TrackingGrid {
    /// All cells `Unknown`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.hits.clear_all();
        self.misses.clear_all();
    }

    pub fn cell(&self, at: Coord) -> TrackCell {
        if self.hits.get(at.row(), at.col()).unwrap_or(false) {
            TrackCell::Hit
        } else if self.misses.get(at.row(), at.col()).unwrap_or(false) {
            TrackCell::Miss
        } else {
            TrackCell::Unknown
        }
    }

    pub fn is_tried(&self, at: Coord) -> bool {
        self.cell(at) != TrackCell::Unknown
    }

    /// Record the outcome of a shot at `at`. `AlreadyTried` leaves the grid
    /// as it was.
    pub fn record(&mut self, at: Coord, result: AttackResult) -> Result<(), GameError> {
        match result {
            AttackResult::Hit => self.hits.set(at.row(), at.col())?,
            AttackResult::Miss => self.misses.set(at.row(), at.col())?,
            AttackResult::AlreadyTried => {}
        }
        Ok(())
    }

    /// Cells not yet fired at, row-major.
    pub fn untried(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| !self.is_tried(c))
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }
}

//! One player's grid: ship placement, attack resolution and the sunk check.
//!
//! Cell state is kept as three disjoint masks. `ships` marks every segment
//! ever placed, `hits` is the subset of `ships` that has been fired upon and
//! `misses` holds fired-upon water. [`Board::cell`] folds them back into a
//! [`CellState`].

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::{AttackResult, CellState, GameError};
use crate::config::{ship_type_for_size, BB, BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    ships: BB,
    hits: BB,
    misses: BB,
    placed: Vec<Ship>,
}

#[inline]
fn marked(mask: &BB, at: Coord) -> bool {
    mask.get(at.row(), at.col()).unwrap_or(false)
}

impl Board {
    /// Create an empty board (every cell `Empty`, no ships).
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every cell to `Empty` and forget placed ships.
    pub fn initialize(&mut self) {
        self.ships.clear_all();
        self.hits.clear_all();
        self.misses.clear_all();
        self.placed.clear();
    }

    pub fn cell(&self, at: Coord) -> CellState {
        if marked(&self.hits, at) {
            CellState::Hit
        } else if marked(&self.ships, at) {
            CellState::Ship
        } else if marked(&self.misses, at) {
            CellState::Miss
        } else {
            CellState::Empty
        }
    }

    /// Ships in the order they were placed.
    pub fn ships(&self) -> &[Ship] {
        &self.placed
    }

    /// Mask of all ship segments, hit or not.
    pub fn ship_map(&self) -> BB {
        self.ships
    }

    /// Number of cells currently in state `Ship`.
    pub fn remaining_ship_cells(&self) -> usize {
        (self.ships & !self.hits).count_ones()
    }

    /// Ships with every segment hit.
    pub fn sunk_ships(&self) -> usize {
        self.placed.iter().filter(|s| s.is_sunk(&self.hits)).count()
    }

    /// True iff no cell is in state `Ship`.
    pub fn all_ships_sunk(&self) -> bool {
        self.remaining_ship_cells() == 0
    }

    /// Would a ship of `size` at `anchor` fit on empty water?
    pub fn can_place_ship(&self, size: usize, anchor: Coord, orientation: Orientation) -> bool {
        self.check_placement(size, anchor, orientation).is_ok()
    }

    fn check_placement(
        &self,
        size: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<Ship, GameError> {
        let ship = Ship::new(size, anchor, orientation)?;
        if ship.mask().intersects(&(self.ships | self.misses)) {
            return Err(GameError::ShipOverlaps);
        }
        Ok(ship)
    }

    /// Place a straight ship of `size` cells from `anchor`. Every cell of the
    /// run must be on the grid and `Empty`; on error the board is unchanged.
    pub fn place_ship(
        &mut self,
        size: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<Ship, GameError> {
        let ship = self.check_placement(size, anchor, orientation)?;
        self.ships |= ship.mask();
        self.placed.push(ship);
        Ok(ship)
    }

    /// Place every ship of [`FLEET`] at random, in fleet order.
    ///
    /// Each ship samples an anchor over the whole grid and an orientation
    /// until it fits, giving up after [`MAX_PLACEMENT_ATTEMPTS`] tries.
    pub fn place_all_ships_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for def in FLEET.iter() {
            self.place_randomly(rng, def.length())?;
        }
        Ok(())
    }

    fn place_randomly<R: Rng>(&mut self, rng: &mut R, size: usize) -> Result<Ship, GameError> {
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let anchor = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            )?;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match self.place_ship(size, anchor, orientation) {
                Ok(ship) => {
                    debug!(
                        "placed {} ({}) at {} {:?} after {} attempt(s)",
                        ship_type_for_size(size).map_or("ship", |d| d.name()),
                        size,
                        anchor,
                        orientation,
                        attempt
                    );
                    return Ok(ship);
                }
                Err(GameError::ShipOutOfBounds) | Err(GameError::ShipOverlaps) => continue,
                Err(e) => return Err(e),
            }
        }
        warn!(
            "gave up placing size {} ship after {} attempts",
            size, MAX_PLACEMENT_ATTEMPTS
        );
        Err(GameError::PlacementExhausted { size })
    }

    /// Fire at `at`. `Ship` becomes `Hit`, `Empty` becomes `Miss`; a cell
    /// that was already resolved reports `AlreadyTried` and is left alone.
    pub fn attack(&mut self, at: Coord) -> Result<AttackResult, GameError> {
        match self.cell(at) {
            CellState::Ship => {
                self.hits.set(at.row(), at.col())?;
                Ok(AttackResult::Hit)
            }
            CellState::Empty => {
                self.misses.set(at.row(), at.col())?;
                Ok(AttackResult::Miss)
            }
            CellState::Hit | CellState::Miss => Ok(AttackResult::AlreadyTried),
        }
    }
}

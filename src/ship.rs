//! Ship definitions and the straight runs they occupy.

use core::fmt;

use crate::common::GameError;
use crate::config::BB;
use crate::coord::Coord;

/// Direction a ship extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Extends to the right (increasing column).
    Horizontal,
    /// Extends downward (increasing row).
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A placed ship: `size` contiguous cells starting at `anchor`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    size: usize,
    anchor: Coord,
    orientation: Orientation,
    mask: BB,
}

impl Ship {
    /// Build the run for a ship of `size` at `anchor`. Fails if the run is
    /// empty or would leave the grid; does not look at any board.
    pub fn new(size: usize, anchor: Coord, orientation: Orientation) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidShipSize);
        }
        let mut mask = BB::new();
        for i in 0..size {
            let cell = anchor
                .offset(i, orientation)
                .ok_or(GameError::ShipOutOfBounds)?;
            mask.set(cell.row(), cell.col())?;
        }
        Ok(Ship {
            size,
            anchor,
            orientation,
            mask,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the run.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Cells of the run, from the anchor outward.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).filter_map(move |i| self.anchor.offset(i, self.orientation))
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.mask.get(at.row(), at.col()).unwrap_or(false)
    }

    /// True once every segment is set in `hits`.
    pub fn is_sunk(&self, hits: &BB) -> bool {
        (self.mask & *hits) == self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ size: {}, anchor: {}, orientation: {:?} }}",
            self.size, self.anchor, self.orientation
        )
    }
}

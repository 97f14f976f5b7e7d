//! Shared cell states, attack outcomes and the engine error type.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Truth state of one cell on a player's own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    /// Ship segment not yet fired upon.
    Ship,
    /// Ship segment that has been hit.
    Hit,
    /// Open water that has been fired upon.
    Miss,
}

impl CellState {
    /// Console symbol for this state.
    pub const fn symbol(self) -> char {
        match self {
            CellState::Empty => '~',
            CellState::Ship => 'S',
            CellState::Hit => 'X',
            CellState::Miss => 'O',
        }
    }
}

/// What a player knows about one cell of the opponent's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackCell {
    Unknown,
    Hit,
    Miss,
}

impl TrackCell {
    pub const fn symbol(self) -> char {
        match self {
            TrackCell::Unknown => '~',
            TrackCell::Hit => 'X',
            TrackCell::Miss => 'O',
        }
    }
}

/// Outcome of resolving one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    Hit,
    Miss,
    /// The cell was already resolved; nothing changed.
    AlreadyTried,
}

/// Errors returned by board and engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Coordinate outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ships must be at least one cell long.
    InvalidShipSize,
    /// Ship run would leave the grid.
    ShipOutOfBounds,
    /// Ship run crosses a cell that is not empty.
    ShipOverlaps,
    /// Random placement ran out of attempts for a ship of this size.
    PlacementExhausted { size: usize },
    /// Attack issued before the fleets were placed.
    NotStarted,
    /// Attack issued by the player who is not on turn.
    NotYourTurn,
    /// Attack issued after the game finished.
    GameOver,
    /// Every cell of the opponent's grid has already been fired at.
    NoTargetsLeft,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GameError::OutOfBounds { row, col },
            other => GameError::BitBoard(other),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::InvalidShipSize => write!(f, "Ship size must be at least 1"),
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::ShipOverlaps => write!(f, "Ship placement overlaps an occupied cell"),
            GameError::PlacementExhausted { size } => {
                write!(f, "Unable to place ship of size {}", size)
            }
            GameError::NotStarted => write!(f, "Game has not been set up"),
            GameError::NotYourTurn => write!(f, "It is not this player's turn"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NoTargetsLeft => write!(f, "No untried cells remain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

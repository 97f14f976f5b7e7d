//! Validated grid coordinates and the `A5`-style token format.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// A cell on the grid. Construction guarantees `row < BOARD_SIZE` and
/// `col < BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Coord {
            row: row as u8,
            col: col as u8,
        })
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|i| Coord {
            row: (i / BOARD_SIZE) as u8,
            col: (i % BOARD_SIZE) as u8,
        })
    }

    /// Cell `steps` away along `orientation`, if still on the grid.
    pub fn offset(self, steps: usize, orientation: Orientation) -> Option<Coord> {
        let (row, col) = match orientation {
            Orientation::Horizontal => (self.row(), self.col() + steps),
            Orientation::Vertical => (self.row() + steps, self.col()),
        };
        Coord::new(row, col).ok()
    }
}

/// Renders as column letter then 1-based row, e.g. `A5`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

/// Why a coordinate token was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    Empty,
    /// First character is not a column letter on the grid.
    BadColumn(char),
    /// Row part is missing or not a plain number.
    BadRow,
    /// Row number outside `1..=BOARD_SIZE`.
    RowOutOfRange(usize),
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_col = (b'A' + BOARD_SIZE as u8 - 1) as char;
        match self {
            CoordParseError::Empty => write!(f, "empty input"),
            CoordParseError::BadColumn(c) => {
                write!(f, "invalid column '{}', expected A-{}", c, last_col)
            }
            CoordParseError::BadRow => write!(f, "row must be a number 1-{}", BOARD_SIZE),
            CoordParseError::RowOutOfRange(r) => {
                write!(f, "row {} out of range, expected 1-{}", r, BOARD_SIZE)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordParseError {}

/// Parses a column letter followed by a 1-based row number of at most two
/// digits (`a10`, `J3`).
/// Surrounding whitespace is ignored; case is not significant.
impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let col_ch = chars
            .next()
            .ok_or(CoordParseError::Empty)?
            .to_ascii_uppercase();
        if !col_ch.is_ascii_uppercase() {
            return Err(CoordParseError::BadColumn(col_ch));
        }
        let col = (col_ch as u8 - b'A') as usize;
        if col >= BOARD_SIZE {
            return Err(CoordParseError::BadColumn(col_ch));
        }

        let digits = chars.as_str();
        // Rows are at most two digits, so `A010` is rejected.
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordParseError::BadRow);
        }
        let row: usize = digits.parse().map_err(|_| CoordParseError::BadRow)?;
        if row == 0 || row > BOARD_SIZE {
            return Err(CoordParseError::RowOutOfRange(row));
        }
        Coord::new(row - 1, col).map_err(|_| CoordParseError::RowOutOfRange(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_parse() {
        let c = Coord::new(9, 0).unwrap();
        assert_eq!(c.to_string(), "A10");
        assert_eq!("A10".parse::<Coord>().unwrap(), c);
    }

    #[test]
    fn offset_stops_at_edge() {
        let c = Coord::new(0, 8).unwrap();
        assert_eq!(c.offset(1, Orientation::Horizontal), Some(Coord::new(0, 9).unwrap()));
        assert_eq!(c.offset(2, Orientation::Horizontal), None);
        assert_eq!(c.offset(9, Orientation::Vertical), Some(Coord::new(9, 8).unwrap()));
    }
}

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod autoplay;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod tracking;
#[cfg(feature = "std")]
pub mod ui;

pub use autoplay::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::{Coord, CoordParseError};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use ship::*;
pub use tracking::*;

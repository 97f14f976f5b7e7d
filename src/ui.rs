#![cfg(feature = "std")]
//! Text rendering of grids.
//!
//! Symbols: `~` water or unknown, `S` ship, `X` hit, `O` miss.

use std::string::String;

use crate::{
    board::Board,
    common::CellState,
    config::BOARD_SIZE,
    coord::Coord,
    tracking::TrackingGrid,
};

fn render_grid(symbol_at: impl Fn(Coord) -> char) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for c in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        out.push_str(&format!("{:2}", r + 1));
        for c in 0..BOARD_SIZE {
            out.push(' ');
            out.push(Coord::new(r, c).map(&symbol_at).unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

/// A player's view of the opponent: hits and misses only.
pub fn render_tracking(grid: &TrackingGrid) -> String {
    render_grid(|at| grid.cell(at).symbol())
}

/// A player's own board. Unhit ships are drawn as water unless `reveal`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    render_grid(|at| match board.cell(at) {
        CellState::Ship if !reveal => CellState::Empty.symbol(),
        state => state.symbol(),
    })
}

#![cfg(feature = "std")]
//! Hot-seat console play: two people share one terminal.

use std::io::{BufRead, Write};
use std::string::String;

use anyhow::{anyhow, Context};

use crate::{
    common::AttackResult,
    coord::Coord,
    game::{GameEngine, PlayerId},
    tracking::TrackingGrid,
    ui::render_tracking,
};

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("failed to read from input")?;
    if n == 0 {
        return Err(anyhow!("input closed before the game finished"));
    }
    Ok(line)
}

/// Prompt until the player names a well-formed cell they have not fired at.
pub fn read_target<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tracking: &TrackingGrid,
) -> anyhow::Result<Coord> {
    writeln!(out, "Enter coordinates to attack (e.g., A5):")?;
    loop {
        let line = read_line(input)?;
        match line.parse::<Coord>() {
            Ok(at) if tracking.is_tried(at) => {
                writeln!(out, "You already fired at {}. Choose another target:", at)?;
            }
            Ok(at) => return Ok(at),
            Err(e) => {
                log::debug!("rejected input {:?}: {}", line.trim(), e);
                writeln!(out, "Invalid input. Please enter coordinates in the format A5:")?;
            }
        }
    }
}

/// Drive a set-up engine to the end, reading moves from `input` and writing
/// prompts, grids and results to `out`. Returns the winner.
pub fn run_hotseat<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    mut input: R,
    mut out: W,
) -> anyhow::Result<PlayerId> {
    while let Some(player) = engine.active_player() {
        writeln!(out, "{}'s turn:", player)?;
        write!(out, "{}", render_tracking(engine.tracking(player)))?;
        let at = read_target(&mut input, &mut out, engine.tracking(player))?;
        match engine.apply_attack(player, at)? {
            AttackResult::Hit => writeln!(out, "Hit!")?,
            AttackResult::Miss => writeln!(out, "Miss!")?,
            AttackResult::AlreadyTried => writeln!(out, "Already tried {}.", at)?,
        }
    }

    let winner = engine
        .winner()
        .ok_or_else(|| anyhow!("game loop ended without a winner"))?;
    writeln!(
        out,
        "{} wins! All {}'s ships are sunk.",
        winner,
        winner.opponent()
    )?;
    out.flush()?;
    Ok(winner)
}

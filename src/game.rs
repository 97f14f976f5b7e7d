use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::{
    board::Board,
    common::{AttackResult, GameError},
    coord::Coord,
    tracking::TrackingGrid,
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fleets not placed yet.
    Setup,
    /// Waiting for this player to fire.
    Turn(PlayerId),
    /// Terminal.
    GameOver { winner: PlayerId },
}

/// Both players' boards and tracking grids plus the turn state.
#[derive(Clone, Debug)]
pub struct GameEngine {
    boards: [Board; 2],
    tracking: [TrackingGrid; 2],
    turns: [usize; 2],
    phase: Phase,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine in [`Phase::Setup`] with empty boards.
    pub fn new() -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            tracking: [TrackingGrid::new(), TrackingGrid::new()],
            turns: [0; 2],
            phase: Phase::Setup,
        }
    }

    /// Start a game from boards that already carry their ships. Player 1
    /// moves first. If a board has nothing left afloat the game is over
    /// at once, with player 2's board checked first.
    pub fn with_boards(board1: Board, board2: Board) -> Self {
        let mut engine = Self {
            boards: [board1, board2],
            tracking: [TrackingGrid::new(), TrackingGrid::new()],
            turns: [0; 2],
            phase: Phase::Turn(PlayerId::One),
        };
        if let Some(winner) = engine.sunk_side() {
            engine.phase = Phase::GameOver { winner };
        }
        engine
    }

    /// Clear both boards and tracking grids, place both fleets at random and
    /// hand the first turn to player 1. On error the engine stays in
    /// [`Phase::Setup`].
    pub fn setup<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.phase = Phase::Setup;
        self.turns = [0; 2];
        for grid in self.tracking.iter_mut() {
            grid.reset();
        }
        for board in self.boards.iter_mut() {
            board.initialize();
        }
        for board in self.boards.iter_mut() {
            board.place_all_ships_randomly(rng)?;
        }
        self.phase = Phase::Turn(PlayerId::One);
        info!("fleets placed, {} to move", PlayerId::One);
        Ok(())
    }

    /// Resolve `attacker`'s shot at `at` on the opponent's board and mirror
    /// the outcome on the attacker's tracking grid.
    ///
    /// The turn passes to the opponent after every resolved shot, including
    /// `AlreadyTried`. Errors leave the engine untouched.
    pub fn apply_attack(
        &mut self,
        attacker: PlayerId,
        at: Coord,
    ) -> Result<AttackResult, GameError> {
        match self.phase {
            Phase::Setup => return Err(GameError::NotStarted),
            Phase::GameOver { .. } => return Err(GameError::GameOver),
            Phase::Turn(active) if active != attacker => return Err(GameError::NotYourTurn),
            Phase::Turn(_) => {}
        }

        let defender = attacker.opponent();
        let result = self.boards[defender.index()].attack(at)?;
        self.tracking[attacker.index()].record(at, result)?;
        self.turns[attacker.index()] += 1;
        debug!("{} fires at {}: {:?}", attacker, at, result);

        self.phase = if self.boards[defender.index()].all_ships_sunk() {
            info!(
                "{} wins after {} turns",
                attacker,
                self.turns[attacker.index()]
            );
            Phase::GameOver { winner: attacker }
        } else {
            Phase::Turn(defender)
        };
        Ok(result)
    }

    /// True once either fleet is fully sunk. Never reverts within a game.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// The player whose opponent's fleet is fully sunk, once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player expected to fire next, if the game is in progress.
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Turn(player) => Some(player),
            _ => None,
        }
    }

    /// `player`'s own board.
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    /// `player`'s record of shots at the opponent.
    pub fn tracking(&self, player: PlayerId) -> &TrackingGrid {
        &self.tracking[player.index()]
    }

    /// Shots `player` has taken so far, repeats included.
    pub fn turns_taken(&self, player: PlayerId) -> usize {
        self.turns[player.index()]
    }

    fn sunk_side(&self) -> Option<PlayerId> {
        if self.board(PlayerId::Two).all_ships_sunk() {
            Some(PlayerId::One)
        } else if self.board(PlayerId::One).all_ships_sunk() {
            Some(PlayerId::Two)
        } else {
            None
        }
    }
}

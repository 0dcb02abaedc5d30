use serde::Serialize;

use super::board::{Board, DropError, COLS};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    InProgress,
    Terminal,
}

/// Board, side to move, and whether the game is still accepting moves.
///
/// Only [`GameController`](super::GameController) mutates a state; everyone
/// else sees it through shared references.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        if self.outcome.is_some() {
            Phase::Terminal
        } else {
            Phase::InProgress
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that can still take a piece; empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece. Does not evaluate or change turns.
    pub(super) fn drop_current(&mut self, column: usize) -> Result<usize, DropError> {
        self.board.drop_piece(column, self.current_player)
    }

    pub(super) fn advance_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    pub(super) fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

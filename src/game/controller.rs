use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::board::{DropError, COLS};
use super::evaluator::{self, MoveVerdict};
use super::player::Player;
use super::state::{GameOutcome, GameState, Phase};
use crate::error::MoveError;

/// What a controller call did, for the frontend to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MoveEvent {
    Moved {
        row: usize,
        column: usize,
        player: Player,
    },
    ColumnFull {
        column: usize,
    },
    Win {
        row: usize,
        column: usize,
        player: Player,
    },
    Draw {
        row: usize,
        column: usize,
        player: Player,
    },
    Reset,
}

/// Turn sequencing over an exclusively owned [`GameState`].
///
/// `InProgress` accepts moves. After a win or a full board the state is
/// `Terminal` and only [`reset`](Self::reset) changes anything.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    pub fn new() -> Self {
        GameController {
            state: GameState::initial(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    pub fn legal_columns(&self) -> Vec<usize> {
        self.state.legal_columns()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full column is vetoed without touching the state and reported as
    /// [`MoveEvent::ColumnFull`].
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn submit_move(&mut self, column: usize) -> Result<MoveEvent, MoveError> {
        if self.state.is_terminal() {
            warn!(column, "move rejected, game is over");
            return Err(MoveError::GameOver);
        }
        if column >= COLS {
            warn!(column, "move rejected, column out of range");
            return Err(MoveError::InvalidColumn(column));
        }

        let mover = self.state.current_player();
        let row = match self.state.drop_current(column) {
            Ok(row) => row,
            Err(DropError::ColumnFull) => {
                debug!(column, "column full");
                return Ok(MoveEvent::ColumnFull { column });
            }
            Err(DropError::InvalidColumn) => return Err(MoveError::InvalidColumn(column)),
        };

        // Evaluate with the mover, before the turn flips
        match evaluator::evaluate(self.state.board(), row, column, mover) {
            MoveVerdict::Win => {
                self.state.finish(GameOutcome::Winner(mover));
                info!(row, column, winner = %mover, "game won");
                Ok(MoveEvent::Win {
                    row,
                    column,
                    player: mover,
                })
            }
            MoveVerdict::Continue if self.state.board().is_full() => {
                self.state.finish(GameOutcome::Draw);
                info!(row, column, "board full, game drawn");
                Ok(MoveEvent::Draw {
                    row,
                    column,
                    player: mover,
                })
            }
            MoveVerdict::Continue => {
                self.state.advance_turn();
                debug!(row, column, next = %self.state.current_player(), "piece placed");
                Ok(MoveEvent::Moved {
                    row,
                    column,
                    player: mover,
                })
            }
        }
    }

    /// Start over from an empty board with Red to move, from any phase.
    #[instrument(skip(self), fields(phase = ?self.state.phase()))]
    pub fn reset(&mut self) -> MoveEvent {
        self.state = GameState::initial();
        info!("game reset");
        MoveEvent::Reset
    }
}

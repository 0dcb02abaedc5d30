//! Core Connect Four game logic: board, players, win detection, and the turn
//! controller that owns the game state.

mod board;
mod controller;
pub mod evaluator;
mod player;
mod state;

pub use board::{Board, Cell, DropError, COLS, ROWS};
pub use controller::{GameController, MoveEvent};
pub use evaluator::{evaluate, MoveVerdict};
pub use player::Player;
pub use state::{GameOutcome, GameState, Phase};

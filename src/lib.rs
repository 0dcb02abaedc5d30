//! # Connect Four
//!
//! Connect Four game core with a terminal frontend. The core is a fixed 6×7
//! board with gravity drops, four-in-a-row detection along every axis through
//! the last piece, and a controller that alternates turns and locks the game
//! once it is won or drawn.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win evaluation, controller
//! - [`ui`] — Terminal UI: board view and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

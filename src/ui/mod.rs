//! Terminal UI: a ratatui view of the board that turns key presses into
//! controller calls and shows the resulting events.

mod app;
mod game_view;

pub use app::{describe, App};

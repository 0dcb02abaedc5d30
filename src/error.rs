use std::path::PathBuf;

/// Moves the controller refuses outright. A full column is not an error; it is
/// reported as [`MoveEvent::ColumnFull`](crate::game::MoveEvent::ColumnFull).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0..{cols})", cols = crate::game::COLS)]
    InvalidColumn(usize),

    #[error("game is over; reset to play again")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

use std::path::PathBuf;

use crate::board::Pos;

/// Reasons a session command is refused.
///
/// A rejected command never changes the session, so callers that only want
/// the original "ignore the click" behaviour can drop the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no game in progress")]
    NotInProgress,

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("it is the computer's turn")]
    NotYourTurn,

    #[error("nothing to undo")]
    NothingToUndo,
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

//! Error types for the Super Tic-Tac-Toe crate

use thiserror::Error;

use crate::tictactoe::Axis;

/// Main error type for the crate
///
/// Move rejections that a player can recover from (occupied cell, decided
/// game, ...) are not errors; they come back as
/// [`Rejection`](crate::tictactoe::Rejection) values.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{axis} {value} is out of bounds (must be 0-2)")]
    InvalidCoordinate { axis: Axis, value: usize },

    #[error("invalid player '{input}' (expected 'X' or 'O')")]
    InvalidPlayer { input: String },

    #[error("invalid next-board rule '{input}'. Expected one of: {expected}")]
    ParseNextBoardRule { input: String, expected: String },

    #[error("invalid move token '{token}': {reason}")]
    InvalidMoveToken { token: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

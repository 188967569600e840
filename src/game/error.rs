//! Engine error types.
//!
//! Boundary no-ops (walking into a wall or off the board) are not errors;
//! everything listed here is reported back to the caller unmodified.

use std::io;

use thiserror::Error;

use crate::game::types::Point;

/// Reasons a save file cannot be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("save data is empty")]
    Empty,
    #[error("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("unknown tile code {0:?}")]
    UnknownTile(char),
    #[error("no player tile in grid")]
    MissingPlayer,
    #[error("more than one player tile in grid")]
    DuplicatePlayer,
    #[error("currency line {0:?} is not a non-negative integer")]
    BadCurrency(String),
    #[error("lever map start marker not found")]
    MissingLeverMapStart,
    #[error("lever map end marker not found")]
    MissingLeverMapEnd,
    #[error("malformed lever entry {0:?}")]
    BadLeverEntry(String),
    #[error("coordinate {0:?} is not an integer")]
    BadCoordinate(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    /// A lever tile exists on the grid without a lever map entry.
    #[error("lever at {0} has no paired gate")]
    MissingLever(Point),
    /// Toggling this gate would overwrite the player standing in it.
    #[error("gate at {0} is occupied by the player")]
    BlockedGate(Point),
    #[error("invalid save format: {0}")]
    Format(#[from] FormatError),
    #[error("invalid save name {0:?}")]
    InvalidSaveName(String),
    #[error("save file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("unrecognized direction {0:?}")]
    UnknownDirection(String),
}

impl GameError {
    /// Stable machine-readable code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::MissingLever(_) => "MISSING_LEVER",
            GameError::BlockedGate(_) => "GATE_BLOCKED",
            GameError::Format(_) => "INVALID_SAVE_FORMAT",
            GameError::InvalidSaveName(_) => "INVALID_SAVE_NAME",
            GameError::Io(e) if e.kind() == io::ErrorKind::NotFound => "SAVE_NOT_FOUND",
            GameError::Io(_) => "SAVE_IO",
            GameError::UnknownDirection(_) => "UNKNOWN_DIRECTION",
        }
    }
}

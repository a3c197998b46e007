//! Error types shared by the engine, the session and the board parser.

use thiserror::Error;

use crate::board::Stone;

/// Errors raised at the engine boundary.
///
/// The search itself never fails; every variant here is detected before the
/// board is touched, so a failed call always leaves the board as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid side to move: {0:?}")]
    InvalidPlayer(Stone),

    #[error("board size mismatch: engine configured for {expected}x{expected}, got {actual}x{actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("unsupported board size: {0}")]
    InvalidBoardSize(usize),

    #[error("malformed board: {0}")]
    MalformedBoard(String),

    #[error("no move available: the board is full")]
    BoardFull,

    #[error("unknown difficulty '{0}' (expected beginner, intermediate, advance or expert)")]
    UnknownDifficulty(String),

    #[error("unknown color '{0}' (expected black or white)")]
    UnknownColor(String),
}

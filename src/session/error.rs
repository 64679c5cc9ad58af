//! Session-level errors.

use thiserror::Error;

use crate::core::GameError;

/// Errors from running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown game: {0}")]
    UnknownGame(String),

    #[error("bad command: {0:?}")]
    BadCommand(String),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("replay log error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed replay log: {0}")]
    BadLog(String),
}

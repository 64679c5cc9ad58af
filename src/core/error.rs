//! Error type shared by piles, the deck factory and rule-sets.
//!
//! Every variant is recoverable: a rejected move leaves the table exactly as
//! it was, and the caller decides whether to report it or try something else.

use thiserror::Error;

/// Errors raised by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `top` or `pop` on a pile with no cards.
    #[error("the pile is empty")]
    EmptyPile,

    /// `pop` on a pile configured as append-only.
    #[error("cards cannot be removed from this pile")]
    ImmutablePile,

    /// `push` rejected by the pile's initial rank or stacking criteria.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    /// No eligible run, destination refused it, or the move does not fit
    /// the active game's grammar.
    #[error("{0}")]
    InvalidMove(String),

    /// Bad deck parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Dealing from an exhausted deck.
    #[error("the deck is empty")]
    EmptyDeck,
}

impl GameError {
    /// Shorthand for [`GameError::InvalidMove`].
    pub fn invalid_move(msg: impl Into<String>) -> Self {
        Self::InvalidMove(msg.into())
    }

    /// Shorthand for [`GameError::InvalidPlacement`].
    pub fn invalid_placement(msg: impl Into<String>) -> Self {
        Self::InvalidPlacement(msg.into())
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;

//! # solitaire
//!
//! A rule-enforcement engine for stack-based solitaire card games.
//!
//! ## Design Principles
//!
//! 1. **Game-Configured Piles**: No hardcoded foundations or columns. Games
//!    build their piles from `PileConfig` and `Criteria` values.
//!
//! 2. **All-or-Nothing Moves**: Every move is validated before any card
//!    leaves its pile. A rejected move leaves the table untouched.
//!
//! 3. **Explicit Randomness**: The shuffle source is a seeded `GameRng`
//!    passed from the session into the deck factory, so a seed plus the
//!    command history replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Errors and the seeded RNG
//! - `cards`: Cards, stacking criteria, deck factory
//! - `piles`: Piles and block moves
//! - `table`: Table layout, locations, command parsing
//! - `rules`: `Solitaire` trait, shared transfers, game registry
//! - `games`: Example and Spider rule-sets
//! - `session`: Replay log and session runner

pub mod core;
pub mod cards;
pub mod piles;
pub mod table;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, Result};

pub use crate::cards::{make_deck, Card, Color, Criteria, RankRelation, Suit, SuitRelation};

pub use crate::piles::{Pile, PileConfig, Rejected};

pub use crate::table::{parse_move, Location, Move, Table};

pub use crate::rules::{GameRegistry, Solitaire};

pub use crate::games::{ExampleGame, SpiderGame};

pub use crate::session::{Outcome, ReplayLog, ReplayWriter, Session, SessionError};

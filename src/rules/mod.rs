//! Rules engine trait for game implementations.
//!
//! Games implement `Solitaire` to define:
//! - The table layout and initial deal
//! - What each command does to the piles
//! - The win condition
//!
//! The session calls into `Solitaire` but never interprets game-specific
//! moves directly.

pub mod engine;
pub mod registry;
pub mod transfer;

pub use engine::Solitaire;
pub use registry::{GameFactory, GameRegistry};
pub use transfer::{card_to_pile, pile_to_pile};

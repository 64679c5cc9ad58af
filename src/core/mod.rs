//! Core engine types: errors and the seeded RNG.
//!
//! These are shared by every other module and know nothing about specific
//! games.

pub mod error;
pub mod rng;

pub use error::{GameError, Result};
pub use rng::GameRng;

//! Sessions, replay logs and front-end configuration.
//!
//! ## Key Types
//!
//! - `Session`: Deals a game, applies commands, tracks the replay log
//! - `ReplayLog` / `ReplayWriter`: Seed, game name and command history
//! - `SessionConfig`: Command-line options for the `solitaire` binary

pub mod config;
pub mod error;
pub mod replay;
pub mod runner;

pub use config::SessionConfig;
pub use error::SessionError;
pub use replay::{ReplayLog, ReplayWriter};
pub use runner::{Outcome, Session};

//! Pile system for card stacks.
//!
//! Piles are **game-configured**: each game builds its foundations, tableau
//! columns and deck from `PileConfig` values describing what may be placed,
//! removed and moved as a block.
//!
//! ## Key Types
//!
//! - `PileConfig`: Placement, removal and display policy
//! - `Pile`: Owned card stack with push/pop/block-move operations
//! - `Rejected`: A refused push, carrying the card back to the caller

pub mod pile;

pub use pile::{Pile, PileConfig, Rejected, EMPTY_MARKER};

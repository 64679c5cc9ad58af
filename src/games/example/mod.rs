//! Example game with same-suit foundations.
//!
//! - 4 foundations accepting any card of the suit already on them
//! - 12 tableau piles without placement rules, 52 cards dealt face-down
//!   with each top turned up
//! - Move a tableau top to a foundation (`A` tries every foundation, `A1`
//!   targets one) or onto another tableau pile (`AB`)
//! - Won when every tableau pile is empty

mod game;

pub use game::ExampleGame;

//! One-suit Spider.
//!
//! - Two decks of Spades dealt over 10 tableau piles (6 cards on piles
//!   A, D, G and J, 5 on the rest), all face-up
//! - Columns build down by rank; descending runs move as a block (`AB`)
//! - `M` deals one card onto every tableau pile
//! - A complete King-to-Ace run goes to an empty foundation (`A`)
//! - Won when every tableau pile is empty

mod game;

pub use game::SpiderGame;

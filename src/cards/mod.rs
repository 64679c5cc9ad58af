//! Card system: cards, stacking criteria, and the deck factory.
//!
//! ## Key Types
//!
//! - `Card`: Rank, suit and face state
//! - `Criteria`: Suit/rank relation compiled into a stacking predicate
//! - `make_deck`: Shuffled pile built from N decks of 1, 2 or 4 suits

pub mod card;
pub mod criteria;
pub mod deck;

pub use card::{Card, Color, Suit, ACE, KING};
pub use criteria::{Criteria, RankRelation, SuitRelation};
pub use deck::make_deck;

//! Deck factory.

use tracing::debug;

use super::card::{Card, Suit, KING};
use crate::core::{GameError, GameRng, Result};
use crate::piles::Pile;

/// Build a shuffled pile of face-down cards.
///
/// Each of the `num_decks` decks has 52 cards made from 1, 2 or 4 suits:
/// - 4 suits: one Ace..King run per suit
/// - 2 suits: Spades and Hearts stand in for their colors, two runs each
/// - 1 suit: four runs of Spades
///
/// The returned pile has no placement rules and can be popped freely.
pub fn make_deck(num_decks: usize, num_suits: usize, rng: &mut GameRng) -> Result<Pile> {
    let suits: &[Suit] = match num_suits {
        4 => &Suit::ALL,
        2 => &[Suit::Spades, Suit::Hearts],
        1 => &[Suit::Spades],
        n => {
            return Err(GameError::InvalidConfiguration(format!(
                "a deck can be built from 1, 2 or 4 suits, not {n}"
            )))
        }
    };
    let runs_per_suit = num_decks * 4 / num_suits;

    let mut cards = Vec::with_capacity(num_decks * 52);
    for &suit in suits {
        for _ in 0..runs_per_suit {
            cards.extend((1..=KING).map(|rank| Card::new(rank, suit)));
        }
    }
    rng.shuffle(&mut cards);

    debug!(num_decks, num_suits, cards = cards.len(), seed = rng.seed(), "deck shuffled");
    Ok(Pile::from_cards(Default::default(), cards))
}

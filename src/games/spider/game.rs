//! Spider game implementation.

use tracing::debug;

use crate::cards::{make_deck, Criteria, RankRelation, SuitRelation, ACE, KING};
use crate::core::{GameError, GameRng, Result};
use crate::piles::{Pile, PileConfig};
use crate::rules::{pile_to_pile, Solitaire};
use crate::table::{Location, Table};

/// Number of foundations (one per completed suit run).
pub const FOUNDATIONS: usize = 8;
/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 10;
/// Decks shuffled together.
pub const DECKS: usize = 2;
/// Suits used to build those decks.
pub const SUITS: usize = 1;

/// Spider with one suit and two decks.
#[derive(Clone, Debug, Default)]
pub struct SpiderGame;

impl SpiderGame {
    /// Registry name.
    pub const NAME: &'static str = "Spider";

    pub fn new() -> Self {
        Self
    }

    fn foundation_config() -> PileConfig {
        PileConfig::new()
            .stack(Criteria::rank(RankRelation::Ascending))
            .moves(Criteria::rank(RankRelation::Ascending))
    }

    fn tableau_config() -> PileConfig {
        PileConfig::new()
            .visible()
            .stack(Criteria::rank(RankRelation::Ascending))
            .moves(Criteria::rank(RankRelation::Ascending))
    }

    /// Cards dealt to tableau pile `index` at the start.
    #[must_use]
    pub fn initial_pile_size(index: usize) -> usize {
        if index % 3 == 0 {
            6
        } else {
            5
        }
    }

    /// Move a complete King-to-Ace run from the top of `source` onto
    /// `foundation`.
    ///
    /// The run is gathered into a scratch pile that only accepts a King
    /// first and only pulls same-colored descending cards, so an incomplete
    /// run is refused without touching `source`. The foundation ends with
    /// the King at the bottom and the Ace on top.
    pub fn run_to_foundation(source: &mut Pile, foundation: &mut Pile) -> Result<()> {
        let top = source
            .top()
            .map_err(|_| GameError::invalid_move("the pile is empty"))?;
        if top.rank() != ACE {
            return Err(GameError::invalid_move(
                "only a run ending in an Ace can go to a foundation",
            ));
        }

        let mut scratch = Pile::new(
            PileConfig::new()
                .initial_rank(KING)
                .stack(Criteria::rank(RankRelation::Ascending))
                .moves(Criteria::new(Some(SuitRelation::SameColor), Some(RankRelation::Ascending))),
        );
        scratch
            .move_block(source)
            .map_err(|_| GameError::invalid_move("the run from King to Ace is not complete"))?;

        for card in scratch.take_all() {
            foundation.force_push(card);
        }
        source.reveal_top();
        Ok(())
    }

    /// One face-up card from the deck onto each tableau pile.
    fn deal_row(table: &mut Table) -> Result<()> {
        if table.deck.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        for pile in &mut table.tableau {
            let Ok(mut card) = table.deck.pop() else {
                break;
            };
            card.flip();
            pile.force_push(card);
        }
        debug!(deck = table.deck.len(), "row dealt");
        Ok(())
    }
}

impl Solitaire for SpiderGame {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn deal(&mut self, table: &mut Table, rng: &mut GameRng) -> Result<()> {
        table.deck = make_deck(DECKS, SUITS, rng)?;
        table.foundations = (0..FOUNDATIONS)
            .map(|_| Pile::new(Self::foundation_config()))
            .collect();
        table.tableau.clear();

        for i in 0..TABLEAU_PILES {
            let mut pile = Pile::new(Self::tableau_config());
            for _ in 0..Self::initial_pile_size(i) {
                let mut card = table.deck.pop()?;
                card.flip();
                pile.force_push(card);
            }
            table.tableau.push(pile);
        }

        debug!(game = Self::NAME, deck = table.deck.len(), "dealt");
        Ok(())
    }

    fn is_finished(&self, table: &Table) -> bool {
        table.tableau_cleared()
    }

    fn apply_move(&mut self, table: &mut Table, moves: &[Location]) -> Result<()> {
        match *moves {
            [Location::Tableau(from)] => {
                let to = table
                    .foundations
                    .iter()
                    .position(Pile::is_empty)
                    .ok_or_else(|| GameError::invalid_move("there is no empty foundation"))?;
                let (source, foundation) = table.tableau_and_foundation_mut(from, to)?;
                Self::run_to_foundation(source, foundation)?;
                debug!(from, to, "run completed");
                Ok(())
            }
            [Location::Deck] => Self::deal_row(table),
            [Location::Tableau(from), Location::Tableau(to)] => {
                let (source, dest) = table.tableau_pair_mut(from, to)?;
                let moved = pile_to_pile(source, dest)?;
                debug!(from, to, moved, "block moved");
                Ok(())
            }
            _ => Err(GameError::invalid_move("invalid move")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn run_pile(config: PileConfig) -> Pile {
        let mut pile = Pile::new(config);
        for rank in (ACE..=KING).rev() {
            pile.force_push(Card::face_up(rank, Suit::Spades));
        }
        pile
    }

    #[test]
    fn test_initial_pile_sizes() {
        let sizes: Vec<_> = (0..TABLEAU_PILES).map(SpiderGame::initial_pile_size).collect();
        assert_eq!(sizes, vec![6, 5, 5, 6, 5, 5, 6, 5, 5, 6]);
        assert_eq!(sizes.iter().sum::<usize>(), 54);
    }

    #[test]
    fn test_run_to_foundation_requires_ace_on_top() {
        let mut source = Pile::new(SpiderGame::tableau_config());
        source.force_push(Card::face_up(2, Suit::Spades));
        let mut foundation = Pile::new(SpiderGame::foundation_config());

        let err = SpiderGame::run_to_foundation(&mut source, &mut foundation).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove(_)));
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_incomplete_run_is_untouched() {
        let mut source = Pile::new(SpiderGame::tableau_config());
        for rank in (ACE..=5).rev() {
            source.force_push(Card::face_up(rank, Suit::Spades));
        }
        let mut foundation = Pile::new(SpiderGame::foundation_config());

        assert!(SpiderGame::run_to_foundation(&mut source, &mut foundation).is_err());
        assert_eq!(source.len(), 5);
        assert!(foundation.is_empty());
    }

    #[test]
    fn test_run_broken_by_color_is_refused() {
        let mut source = Pile::new(SpiderGame::tableau_config());
        for rank in (ACE..=KING).rev() {
            let suit = if rank == 7 { Suit::Hearts } else { Suit::Spades };
            source.force_push(Card::face_up(rank, suit));
        }
        let mut foundation = Pile::new(SpiderGame::foundation_config());

        assert!(SpiderGame::run_to_foundation(&mut source, &mut foundation).is_err());
        assert_eq!(source.len(), 13);
    }

    #[test]
    fn test_run_to_foundation_reveals_source() {
        let mut source = Pile::new(SpiderGame::tableau_config());
        source.force_push(Card::new(4, Suit::Spades));
        for card in run_pile(PileConfig::new()).take_all() {
            source.force_push(card);
        }
        let mut foundation = Pile::new(SpiderGame::foundation_config());

        SpiderGame::run_to_foundation(&mut source, &mut foundation).unwrap();

        assert_eq!(foundation.len(), 13);
        assert_eq!(source.len(), 1);
        assert!(source.top().unwrap().is_face_up());
    }

    #[test]
    fn test_deal_row() {
        let mut game = SpiderGame::new();
        let mut table = Table::new();
        game.deal(&mut table, &mut GameRng::new(11)).unwrap();

        game.apply_move(&mut table, &[Location::Deck]).unwrap();
        assert_eq!(table.deck.len(), 40);
        for (i, pile) in table.tableau.iter().enumerate() {
            assert_eq!(pile.len(), SpiderGame::initial_pile_size(i) + 1);
            assert!(pile.top().unwrap().is_face_up());
        }
    }

    #[test]
    fn test_deal_from_empty_deck() {
        let mut game = SpiderGame::new();
        let mut table = Table::new();
        game.deal(&mut table, &mut GameRng::new(11)).unwrap();

        for _ in 0..5 {
            game.apply_move(&mut table, &[Location::Deck]).unwrap();
        }
        assert!(table.deck.is_empty());
        let err = game.apply_move(&mut table, &[Location::Deck]).unwrap_err();
        assert_eq!(err, GameError::EmptyDeck);
        assert_eq!(table.card_count(), 104);
    }

    #[test]
    fn test_no_empty_foundation() {
        let mut game = SpiderGame::new();
        let mut table = Table::new();
        table.foundations = (0..FOUNDATIONS)
            .map(|_| {
                let mut pile = Pile::new(SpiderGame::foundation_config());
                pile.force_push(Card::face_up(KING, Suit::Spades));
                pile
            })
            .collect();
        table.tableau = vec![run_pile(SpiderGame::tableau_config())];

        let err = game.apply_move(&mut table, &[Location::Tableau(0)]).unwrap_err();
        assert_eq!(err, GameError::invalid_move("there is no empty foundation"));
        assert_eq!(table.tableau[0].len(), 13);
    }

    #[test]
    fn test_rejects_foundation_destination() {
        let mut game = SpiderGame::new();
        let mut table = Table::new();
        game.deal(&mut table, &mut GameRng::new(2)).unwrap();
        let err = game
            .apply_move(&mut table, &[Location::Tableau(0), Location::Foundation(0)])
            .unwrap_err();
        assert_eq!(err, GameError::invalid_move("invalid move"));
    }
}

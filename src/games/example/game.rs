//! Example game implementation.

use tracing::debug;

use crate::cards::{make_deck, Criteria, SuitRelation};
use crate::core::{GameError, GameRng, Result};
use crate::piles::{Pile, PileConfig};
use crate::rules::{card_to_pile, Solitaire};
use crate::table::{Location, Table};

/// Number of foundations.
pub const FOUNDATIONS: usize = 4;
/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 12;
/// Cards dealt to every tableau pile.
pub const CARDS_PER_PILE: usize = 4;
/// Piles `0..EXTRA_CARD_PILES` get one more card.
pub const EXTRA_CARD_PILES: usize = 4;

/// Same-suit foundation game.
#[derive(Clone, Debug, Default)]
pub struct ExampleGame;

impl ExampleGame {
    /// Registry name.
    pub const NAME: &'static str = "Example";

    pub fn new() -> Self {
        Self
    }

    fn foundation_config() -> PileConfig {
        PileConfig::new().stack(Criteria::suit(SuitRelation::SameSuit))
    }

    fn tableau_config() -> PileConfig {
        PileConfig::new().visible()
    }

    /// Send the top of tableau pile `from` to the first foundation that
    /// takes it.
    fn to_any_foundation(table: &mut Table, from: usize) -> Result<()> {
        for to in 0..table.foundations.len() {
            let (source, dest) = table.tableau_and_foundation_mut(from, to)?;
            if card_to_pile(source, dest).is_ok() {
                debug!(from, to, "card sent to foundation");
                return Ok(());
            }
        }
        Err(GameError::invalid_move("that card cannot go to any foundation"))
    }
}

impl Solitaire for ExampleGame {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn deal(&mut self, table: &mut Table, rng: &mut GameRng) -> Result<()> {
        table.deck = make_deck(1, 4, rng)?;
        table.foundations = (0..FOUNDATIONS)
            .map(|_| Pile::new(Self::foundation_config()))
            .collect();
        table.tableau.clear();

        for i in 0..TABLEAU_PILES {
            let mut pile = Pile::new(Self::tableau_config());
            let count = CARDS_PER_PILE + usize::from(i < EXTRA_CARD_PILES);
            for _ in 0..count {
                pile.force_push(table.deck.pop()?);
            }
            pile.reveal_top();
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
            [Location::Tableau(from)] => Self::to_any_foundation(table, from),
            [Location::Tableau(from), Location::Foundation(to)] => {
                let (source, dest) = table.tableau_and_foundation_mut(from, to)?;
                card_to_pile(source, dest)
            }
            [Location::Tableau(from), Location::Tableau(to)] => {
                let (source, dest) = table.tableau_pair_mut(from, to)?;
                card_to_pile(source, dest)
            }
            _ => Err(GameError::invalid_move("invalid move")),
        }
    }
}

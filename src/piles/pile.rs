//! Card piles and block moves.
//!
//! A `Pile` is an ordered stack of owned cards, bottom first, plus a
//! `PileConfig` fixed at construction that decides:
//! - which card may start an empty pile (`initial_rank`)
//! - which card may go on the current top (`stack_criteria`)
//! - how many cards may travel together in a block move (`move_criteria`)
//! - whether cards may leave at all (`can_pop`)
//!
//! Every mutating operation either fully succeeds or leaves the pile as it
//! was. `move_block` validates before it touches either pile, then transfers
//! the run with a single split.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::cards::{Card, Criteria};
use crate::core::{GameError, Result};

/// Rendering of an empty pile.
pub const EMPTY_MARKER: &str = "X";

/// A card refused by [`Pile::push`], handed back with the reason.
#[derive(Clone, Debug, Error)]
#[error("{error}")]
pub struct Rejected {
    pub error: GameError,
    pub card: Card,
}

impl From<Rejected> for GameError {
    fn from(rejected: Rejected) -> Self {
        rejected.error
    }
}

/// Placement, removal and display policy of a pile.
///
/// ```
/// use solitaire::cards::{Criteria, RankRelation};
/// use solitaire::piles::PileConfig;
///
/// let column = PileConfig::new()
///     .visible()
///     .stack(Criteria::rank(RankRelation::Ascending))
///     .moves(Criteria::rank(RankRelation::Ascending));
/// assert!(column.visible_all);
/// assert!(column.can_pop);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileConfig {
    /// Display every card instead of only the top.
    pub visible_all: bool,

    /// Rank required for the first card on an empty pile. `None` accepts any.
    pub initial_rank: Option<u8>,

    /// Can cards be removed from this pile?
    pub can_pop: bool,

    /// Rule for placing a card on a non-empty pile.
    pub stack_criteria: Option<Criteria>,

    /// Rule for extending a block move downward from a source's top.
    pub move_criteria: Option<Criteria>,
}

impl Default for PileConfig {
    fn default() -> Self {
        Self {
            visible_all: false,
            initial_rank: None,
            can_pop: true,
            stack_criteria: None,
            move_criteria: None,
        }
    }
}

impl PileConfig {
    /// Unrestricted, poppable, top-only display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show every card when rendered.
    #[must_use]
    pub fn visible(mut self) -> Self {
        self.visible_all = true;
        self
    }

    /// Only `rank` may start the pile.
    #[must_use]
    pub fn initial_rank(mut self, rank: u8) -> Self {
        self.initial_rank = Some(rank);
        self
    }

    /// Forbid removing cards.
    #[must_use]
    pub fn immutable(mut self) -> Self {
        self.can_pop = false;
        self
    }

    /// Set the stacking criteria.
    #[must_use]
    pub fn stack(mut self, criteria: Criteria) -> Self {
        self.stack_criteria = Some(criteria);
        self
    }

    /// Set the block-move criteria.
    #[must_use]
    pub fn moves(mut self, criteria: Criteria) -> Self {
        self.move_criteria = Some(criteria);
        self
    }
}

/// An ordered stack of cards. Index 0 is the bottom; the last card is the top.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Pile {
    config: PileConfig,
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(config: PileConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
        }
    }

    /// Create a pile holding `cards`, bottom first, without validation.
    #[must_use]
    pub fn from_cards(config: PileConfig, cards: Vec<Card>) -> Self {
        Self { config, cards }
    }

    #[must_use]
    pub fn config(&self) -> &PileConfig {
        &self.config
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The top card.
    pub fn top(&self) -> Result<&Card> {
        self.cards.last().ok_or(GameError::EmptyPile)
    }

    /// Mutable access to the top card, for flipping.
    pub fn top_mut(&mut self) -> Result<&mut Card> {
        self.cards.last_mut().ok_or(GameError::EmptyPile)
    }

    /// Check whether `card` could be pushed, without pushing it.
    pub fn check_placement(&self, card: &Card) -> Result<()> {
        match self.cards.last() {
            None => match self.config.initial_rank {
                Some(rank) if card.rank() != rank => Err(GameError::invalid_placement(format!(
                    "an empty pile must start with rank {rank}"
                ))),
                _ => Ok(()),
            },
            Some(top) => match self.config.stack_criteria {
                Some(criteria) if !criteria.can_stack(top, card) => Err(
                    GameError::invalid_placement(format!("{card} cannot go on {top}")),
                ),
                _ => Ok(()),
            },
        }
    }

    /// Place a card on top after checking the initial rank or stacking
    /// criteria. The card's face state is left as is.
    ///
    /// A refused card comes back inside the error.
    pub fn push(&mut self, card: Card) -> std::result::Result<(), Rejected> {
        if let Err(error) = self.check_placement(&card) {
            return Err(Rejected { error, card });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Place a card on top without evaluating any rule.
    pub fn force_push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyPile);
        }
        if !self.config.can_pop {
            return Err(GameError::ImmutablePile);
        }
        self.cards.pop().ok_or(GameError::EmptyPile)
    }

    /// Turn the top card face-up if it is face-down. Returns whether a card
    /// was flipped.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up() => {
                card.flip();
                true
            }
            _ => false,
        }
    }

    /// Remove every card, returned bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Length of the run on `source`'s top that may travel together under
    /// this pile's move criteria. Zero when the top is missing or face-down.
    fn movable_run_len(&self, source: &Pile) -> usize {
        let cards = source.cards();
        match cards.last() {
            Some(top) if top.is_face_up() => {}
            _ => return 0,
        }

        let Some(criteria) = self.config.move_criteria else {
            return 1;
        };

        let mut len = 1;
        while len < cards.len() {
            let upper = &cards[cards.len() - len];
            let lower = &cards[cards.len() - len - 1];
            if !criteria.can_stack(lower, upper) {
                break;
            }
            len += 1;
        }
        len
    }

    /// Move the largest run that fits from the top of `source` onto this
    /// pile, keeping its order. Returns how many cards moved.
    ///
    /// The eligible run is bounded by this pile's `move_criteria` (only the
    /// top card without one) and by the first face-down card. The deepest
    /// card of that run that passes this pile's placement check lands first.
    /// A face-down top constrains nothing, so the whole run lands on it.
    /// The source's own rules are not consulted.
    ///
    /// Fails with `InvalidMove` and leaves both piles untouched if no card of
    /// the run can be placed.
    pub fn move_block(&mut self, source: &mut Pile) -> Result<usize> {
        let run = self.movable_run_len(source);
        let len = source.len();
        let covers_hidden = self.cards.last().is_some_and(|top| !top.is_face_up());

        let landing = (len - run..len)
            .find(|&i| covers_hidden || self.check_placement(&source.cards[i]).is_ok())
            .ok_or_else(|| GameError::invalid_move("no cards can be moved onto that pile"))?;

        let moved = source.cards.split_off(landing);
        let count = moved.len();
        trace!(eligible = run, moved = count, "block move");
        self.cards.extend(moved);
        Ok(count)
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(top) = self.cards.last() else {
            return f.write_str(EMPTY_MARKER);
        };
        if !self.config.visible_all {
            return write!(f, "{top}");
        }
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

//! Stacking criteria.
//!
//! A `Criteria` combines an optional suit relation with an optional rank
//! relation into a predicate `can_stack(a, b)`: "may `b` sit on top of `a`".
//! Piles use one criteria to accept single cards and another to decide how
//! many cards may move together.

use serde::{Deserialize, Serialize};

use super::card::{Card, RANKS_PER_SUIT};

/// Relation between the suits of two cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitRelation {
    SameSuit,
    SameColor,
    DifferentColor,
    DifferentSuit,
}

/// Relation between the ranks of two cards.
///
/// Named from the lower card's point of view: `Ascending` means the card
/// underneath is one higher, as in a King-down-to-Ace column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankRelation {
    /// `a.rank == b.rank + 1`
    Ascending,
    /// `a.rank + 1 == b.rank`
    Descending,
    /// One step in either direction, wrapping King and Ace.
    Consecutive,
}

/// Compiled stacking predicate.
///
/// ```
/// use solitaire::cards::{Card, Criteria, RankRelation, Suit, SuitRelation};
///
/// let alternating = Criteria::new(
///     Some(SuitRelation::DifferentColor),
///     Some(RankRelation::Ascending),
/// );
/// let queen = Card::face_up(12, Suit::Hearts);
/// let jack = Card::face_up(11, Suit::Clubs);
/// assert!(alternating.can_stack(&queen, &jack));
/// assert!(!alternating.can_stack(&jack, &queen));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criteria {
    suit: Option<SuitRelation>,
    rank: Option<RankRelation>,
}

impl Criteria {
    /// Build a criteria from both dimensions. `None` disables that check.
    #[must_use]
    pub const fn new(suit: Option<SuitRelation>, rank: Option<RankRelation>) -> Self {
        Self { suit, rank }
    }

    /// No constraint beyond both cards being face-up.
    #[must_use]
    pub const fn any() -> Self {
        Self::new(None, None)
    }

    /// Suit constraint only.
    #[must_use]
    pub const fn suit(relation: SuitRelation) -> Self {
        Self::new(Some(relation), None)
    }

    /// Rank constraint only.
    #[must_use]
    pub const fn rank(relation: RankRelation) -> Self {
        Self::new(None, Some(relation))
    }

    #[must_use]
    pub fn suit_relation(&self) -> Option<SuitRelation> {
        self.suit
    }

    #[must_use]
    pub fn rank_relation(&self) -> Option<RankRelation> {
        self.rank
    }

    /// Whether `b` may be stacked on `a`. Always false if either is face-down.
    #[must_use]
    pub fn can_stack(&self, a: &Card, b: &Card) -> bool {
        if !a.is_face_up() || !b.is_face_up() {
            return false;
        }
        self.rank.map_or(true, |rel| rank_matches(rel, a.rank(), b.rank()))
            && self.suit.map_or(true, |rel| suit_matches(rel, a, b))
    }
}

fn rank_matches(relation: RankRelation, a: u8, b: u8) -> bool {
    match relation {
        RankRelation::Ascending => a == b + 1,
        RankRelation::Descending => a + 1 == b,
        RankRelation::Consecutive => a % RANKS_PER_SUIT + 1 == b || b % RANKS_PER_SUIT + 1 == a,
    }
}

fn suit_matches(relation: SuitRelation, a: &Card, b: &Card) -> bool {
    match relation {
        SuitRelation::SameSuit => a.suit() == b.suit(),
        SuitRelation::DifferentSuit => a.suit() != b.suit(),
        SuitRelation::SameColor => a.color() == b.color(),
        SuitRelation::DifferentColor => a.color() != b.color(),
    }
}

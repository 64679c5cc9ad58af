//! French-suited playing cards.
//!
//! A `Card` is a plain owned value. Piles hold cards by value and move them
//! between each other, so a card is never in two places at once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a King.
pub const KING: u8 = 13;
/// Number of ranks in a suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Glyph shown for a face-down card.
pub const HIDDEN_GLYPH: &str = "▓";

const RANK_SYMBOLS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

const ANSI_RED: &str = "\u{1b}[31;47m";
const ANSI_BLACK: &str = "\u{1b}[30;47m";
const ANSI_RESET: &str = "\u{1b}[0m";

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

/// Suit color group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits in display order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Hearts and Diamonds are red; Spades and Clubs are black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Unicode suit glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// A playing card: rank 1..=13, a suit, and which side is up.
///
/// Face-down cards are equal to nothing, themselves included, which is why
/// `Card` implements `PartialEq` but not `Eq`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    rank: u8,
    suit: Suit,
    face_up: bool,
}

/// Unchecked wire form of a `Card`.
#[derive(Deserialize)]
struct CardFields {
    rank: u8,
    suit: Suit,
    face_up: bool,
}

impl TryFrom<CardFields> for Card {
    type Error = GameError;

    fn try_from(fields: CardFields) -> Result<Self, Self::Error> {
        if !(ACE..=KING).contains(&fields.rank) {
            return Err(GameError::InvalidConfiguration(format!(
                "rank out of range: {}",
                fields.rank
            )));
        }
        Ok(Self {
            rank: fields.rank,
            suit: fields.suit,
            face_up: fields.face_up,
        })
    }
}

impl Card {
    /// Create a face-down card.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `rank` is outside 1..=13.
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!((ACE..=KING).contains(&rank), "rank out of range: {rank}");
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub fn face_up(rank: u8, suit: Suit) -> Self {
        let mut card = Self::new(rank, suit);
        card.face_up = true;
        card
    }

    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turn the card over.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Rank symbol: `A`, `2`..`10`, `J`, `Q`, `K`. `?` for a rank outside
    /// 1..=13.
    #[must_use]
    pub fn rank_symbol(&self) -> &'static str {
        usize::from(self.rank)
            .checked_sub(1)
            .and_then(|i| RANK_SYMBOLS.get(i))
            .copied()
            .unwrap_or("?")
    }

    /// Terminal rendering with the glyph wrapped in ANSI colors by suit
    /// color. Face-down cards are left uncolored.
    #[must_use]
    pub fn colored(&self) -> String {
        if !self.face_up {
            return HIDDEN_GLYPH.to_string();
        }
        let tag = match self.color() {
            Color::Red => ANSI_RED,
            Color::Black => ANSI_BLACK,
        };
        format!("{tag}{self}{ANSI_RESET}")
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.face_up && other.face_up && self.rank == other.rank && self.suit == other.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank_symbol(), self.suit.glyph())
        } else {
            f.write_str(HIDDEN_GLYPH)
        }
    }
}

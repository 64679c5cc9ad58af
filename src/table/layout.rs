//! The table: every pile in play.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::location::tableau_letter;
use crate::core::{GameError, Result};
use crate::piles::Pile;

/// Foundations, tableau piles, the deck and an optional discard pile.
///
/// Created empty; a game's `deal` fills it. Games borrow the table for each
/// call and never keep it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Table {
    /// Goal piles, shown numbered from 1.
    pub foundations: Vec<Pile>,
    /// Playing-field piles, shown lettered from A.
    pub tableau: Vec<Pile>,
    /// Stock. Every game has one, possibly empty.
    pub deck: Pile,
    /// Waste pile, for games that use one.
    pub discard: Option<Pile>,
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foundation(&self, index: usize) -> Result<&Pile> {
        self.foundations.get(index).ok_or_else(|| no_such_foundation(index))
    }

    pub fn foundation_mut(&mut self, index: usize) -> Result<&mut Pile> {
        self.foundations.get_mut(index).ok_or_else(|| no_such_foundation(index))
    }

    pub fn tableau(&self, index: usize) -> Result<&Pile> {
        self.tableau.get(index).ok_or_else(|| no_such_pile(index))
    }

    pub fn tableau_mut(&mut self, index: usize) -> Result<&mut Pile> {
        self.tableau.get_mut(index).ok_or_else(|| no_such_pile(index))
    }

    /// Two distinct tableau piles, borrowed together as (source, destination).
    pub fn tableau_pair_mut(&mut self, from: usize, to: usize) -> Result<(&mut Pile, &mut Pile)> {
        if from == to {
            return Err(GameError::invalid_move("source and destination are the same pile"));
        }
        let len = self.tableau.len();
        if from >= len {
            return Err(no_such_pile(from));
        }
        if to >= len {
            return Err(no_such_pile(to));
        }

        if from < to {
            let (low, high) = self.tableau.split_at_mut(to);
            Ok((&mut low[from], &mut high[0]))
        } else {
            let (low, high) = self.tableau.split_at_mut(from);
            Ok((&mut high[0], &mut low[to]))
        }
    }

    /// Tableau pile `from` together with foundation `to`.
    pub fn tableau_and_foundation_mut(
        &mut self,
        from: usize,
        to: usize,
    ) -> Result<(&mut Pile, &mut Pile)> {
        let source = self.tableau.get_mut(from).ok_or_else(|| no_such_pile(from))?;
        let dest = self.foundations.get_mut(to).ok_or_else(|| no_such_foundation(to))?;
        Ok((source, dest))
    }

    /// True when every tableau pile is empty.
    #[must_use]
    pub fn tableau_cleared(&self) -> bool {
        self.tableau.iter().all(Pile::is_empty)
    }

    /// Total cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.tableau.iter().map(Pile::len).sum::<usize>()
            + self.deck.len()
            + self.discard.as_ref().map_or(0, Pile::len)
    }

    /// Input prompt listing the locations valid for this layout.
    #[must_use]
    pub fn prompt(&self) -> String {
        let mut msg = String::from("Enter");
        if !self.foundations.is_empty() {
            msg.push_str(&format!(" [1-{}]", self.foundations.len()));
        }
        if !self.tableau.is_empty() {
            msg.push_str(&format!(" [A-{}]", pile_label(self.tableau.len() - 1)));
        }
        msg.push_str(" M");
        if self.discard.is_some() {
            msg.push_str(" N");
        }
        msg.push_str(" Q: ");
        msg
    }
}

/// Letter for the first 26 piles, 1-based number beyond.
fn pile_label(index: usize) -> String {
    tableau_letter(index).map_or_else(|| index.saturating_add(1).to_string(), String::from)
}

fn no_such_foundation(index: usize) -> GameError {
    GameError::invalid_move(format!("there is no foundation {}", index.saturating_add(1)))
}

fn no_such_pile(index: usize) -> GameError {
    GameError::invalid_move(format!("there is no tableau pile {}", pile_label(index)))
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.foundations.is_empty() {
            writeln!(f, "FOUNDATIONS:")?;
            for (i, pile) in self.foundations.iter().enumerate() {
                writeln!(f, "{} {}", i + 1, pile)?;
            }
        }
        if !self.tableau.is_empty() {
            writeln!(f, "TABLEAU:")?;
            for (i, pile) in self.tableau.iter().enumerate() {
                writeln!(f, "{} {}", pile_label(i), pile)?;
            }
        }
        writeln!(f, "DECK")?;
        writeln!(f, "M {}", self.deck)?;
        if let Some(discard) = &self.discard {
            writeln!(f, "N {discard}")?;
        }
        Ok(())
    }
}

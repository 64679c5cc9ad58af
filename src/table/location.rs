//! Move locations and the command parser.
//!
//! A player command is a short string such as `"A"`, `"B3"`, `"CD"` or `"M"`.
//! Each character names one location; the active game decides what a given
//! sequence of locations means.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::layout::Table;

/// A place on the table named by one character of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Foundation, 0-based (typed `1`..`9`).
    Foundation(usize),
    /// Tableau pile, 0-based (typed `A`, `B`, ...).
    Tableau(usize),
    /// The deck (`M`).
    Deck,
    /// The discard pile (`N`).
    Discard,
    /// Leave the game (`Q`).
    Quit,
}

/// The locations of one command. Games accept one or two.
pub type Move = SmallVec<[Location; 2]>;

/// Parse a command against the table's current layout.
///
/// Case-insensitive. Returns `None` if any character is out of range for
/// this table. Empty input yields an empty move.
///
/// ```
/// use solitaire::table::{parse_move, Location, Table};
/// use solitaire::piles::Pile;
///
/// let mut table = Table::new();
/// table.foundations.push(Pile::default());
/// table.tableau.extend([Pile::default(), Pile::default()]);
///
/// let mv = parse_move(&table, "b1").unwrap();
/// assert_eq!(mv.as_slice(), &[Location::Tableau(1), Location::Foundation(0)]);
/// assert!(parse_move(&table, "C").is_none());
/// ```
#[must_use]
pub fn parse_move(table: &Table, input: &str) -> Option<Move> {
    let mut mv = Move::new();
    for c in input.trim().chars().map(|c| c.to_ascii_uppercase()) {
        let location = match c {
            '0'..='9' => {
                let n = c.to_digit(10)? as usize;
                if n == 0 || n > table.foundations.len() {
                    return None;
                }
                Location::Foundation(n - 1)
            }
            'M' => Location::Deck,
            'N' if table.discard.is_some() => Location::Discard,
            'Q' => Location::Quit,
            'A'..='Z' => {
                let index = (c as u8 - b'A') as usize;
                if index >= table.tableau.len() {
                    return None;
                }
                Location::Tableau(index)
            }
            _ => return None,
        };
        mv.push(location);
    }
    Some(mv)
}

/// Letter naming tableau pile `index`, or `None` past `Z`.
#[must_use]
pub fn tableau_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|&i| i < 26)
        .map(|i| char::from(b'A' + i))
}

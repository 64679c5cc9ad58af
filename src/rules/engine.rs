//! Rules engine trait for game implementations.
//!
//! Games implement `Solitaire` to define their rules:
//! - How the table is laid out and dealt
//! - What each command means and how it changes the piles
//! - When the game is won

use crate::core::{GameRng, Result};
use crate::table::{Location, Table};

/// A solitaire rule-set.
///
/// The session owns the `Table` and lends it to the game for each call.
///
/// ## Implementation Notes
///
/// - `deal`: Must be deterministic for a given RNG state, so replays
///   reproduce the same layout
/// - `apply_move`: Must validate fully before mutating; a rejected move
///   leaves every pile unchanged
pub trait Solitaire {
    /// Registry name of the game.
    fn name(&self) -> &'static str;

    /// Build the piles on an empty table and deal the initial layout.
    fn deal(&mut self, table: &mut Table, rng: &mut GameRng) -> Result<()>;

    /// Has the game been won?
    fn is_finished(&self, table: &Table) -> bool;

    /// Perform one move given as the parsed locations of a command.
    ///
    /// Fails with a descriptive `GameError` if the move is not legal.
    fn apply_move(&mut self, table: &mut Table, moves: &[Location]) -> Result<()>;
}

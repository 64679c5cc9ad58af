//! Pile-to-pile transfers shared by the games.

use crate::core::{GameError, Result};
use crate::piles::Pile;

/// Move the top card of `source` onto `dest` and reveal the new source top.
///
/// `dest` validates the card before anything leaves `source`, so a refused
/// move changes nothing.
pub fn card_to_pile(source: &mut Pile, dest: &mut Pile) -> Result<()> {
    if source.is_empty() {
        return Err(GameError::invalid_move("the pile is empty"));
    }
    dest.check_placement(source.top()?)?;
    let card = source.pop()?;
    dest.force_push(card);
    source.reveal_top();
    Ok(())
}

/// Block-move from `source` onto `dest` and reveal the new source top.
/// Returns how many cards moved.
pub fn pile_to_pile(source: &mut Pile, dest: &mut Pile) -> Result<usize> {
    if source.is_empty() {
        return Err(GameError::invalid_move("the pile is empty"));
    }
    let moved = dest.move_block(source)?;
    source.reveal_top();
    Ok(moved)
}

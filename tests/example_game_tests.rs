//! Example game integration tests.
//!
//! These tests drive the same-suit foundation game through the `Solitaire`
//! trait the way a session does.

use solitaire::cards::{Card, Suit};
use solitaire::core::{GameError, GameRng};
use solitaire::games::ExampleGame;
use solitaire::rules::Solitaire;
use solitaire::table::{Location, Table};

fn dealt(seed: u64) -> (ExampleGame, Table) {
    let mut game = ExampleGame::new();
    let mut table = Table::new();
    game.deal(&mut table, &mut GameRng::new(seed)).unwrap();
    (game, table)
}

fn layout(table: &Table) -> Vec<Vec<(u8, Suit, bool)>> {
    table
        .tableau
        .iter()
        .map(|p| p.cards().iter().map(|c| (c.rank(), c.suit(), c.is_face_up())).collect())
        .collect()
}

/// Same seed, same deal.
#[test]
fn test_deal_is_reproducible() {
    let (_, a) = dealt(1234);
    let (_, b) = dealt(1234);
    let (_, c) = dealt(4321);
    assert_eq!(layout(&a), layout(&b));
    assert_ne!(layout(&a), layout(&c));
}

/// A single tableau location sends its top to the first foundation that
/// accepts it.
#[test]
fn test_top_goes_to_first_accepting_foundation() {
    let (mut game, mut table) = dealt(8);

    let top = table.tableau[0].top().unwrap().clone();
    game.apply_move(&mut table, &[Location::Tableau(0)]).unwrap();
    assert_eq!(table.foundations[0].top().unwrap(), &top);
    assert_eq!(table.tableau[0].len(), 4);
    assert!(table.tableau[0].top().unwrap().is_face_up());

    // Find a pile whose top differs in suit: it must land on foundation 1.
    let other = (1..12)
        .find(|&i| table.tableau[i].top().unwrap().suit() != top.suit())
        .expect("a second suit among the tops");
    let other_top = table.tableau[other].top().unwrap().clone();
    game.apply_move(&mut table, &[Location::Tableau(other)]).unwrap();
    assert_eq!(table.foundations[1].top().unwrap(), &other_top);
}

/// Named foundation refuses a different suit and the table is unchanged.
#[test]
fn test_named_foundation_refuses_other_suit() {
    let (mut game, mut table) = dealt(8);
    game.apply_move(&mut table, &[Location::Tableau(0), Location::Foundation(2)]).unwrap();
    let suit = table.foundations[2].top().unwrap().suit();

    let Some(other) = (1..12).find(|&i| table.tableau[i].top().unwrap().suit() != suit) else {
        return;
    };
    let before = layout(&table);
    let err = game
        .apply_move(&mut table, &[Location::Tableau(other), Location::Foundation(2)])
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidPlacement(_)));
    assert_eq!(layout(&table), before);
}

/// Emptying a pile and then moving from it is refused.
#[test]
fn test_empty_source() {
    let (mut game, mut table) = dealt(2);
    for _ in 0..4 {
        game.apply_move(&mut table, &[Location::Tableau(11), Location::Tableau(0)]).unwrap();
    }
    assert!(table.tableau[11].is_empty());
    assert_eq!(table.tableau[0].len(), 9);

    let err = game.apply_move(&mut table, &[Location::Tableau(11)]).unwrap_err();
    assert!(matches!(err, GameError::InvalidMove(_)));
}

/// The game is won once the tableau is empty; sending every top to the
/// foundation of its suit always gets there.
#[test]
fn test_full_game_is_winnable() {
    let (mut game, mut table) = dealt(77);
    let suits = Suit::ALL;

    while !game.is_finished(&table) {
        let from = table
            .tableau
            .iter()
            .position(|p| !p.is_empty())
            .expect("tableau not empty while unfinished");
        let suit = table.tableau[from].top().unwrap().suit();
        let slot = suits.iter().position(|&s| s == suit).unwrap();
        game.apply_move(&mut table, &[Location::Tableau(from), Location::Foundation(slot)])
            .unwrap();
    }

    let total: usize = table.foundations.iter().map(|f| f.len()).sum();
    assert_eq!(total, 52);
    for (slot, foundation) in table.foundations.iter().enumerate() {
        assert_eq!(foundation.len(), 13);
        assert!(foundation.cards().iter().all(|c| c.suit() == suits[slot]));
    }
}

/// Moving a top uncovers the card beneath it face-up.
#[test]
fn test_tops_stay_face_up() {
    let (mut game, mut table) = dealt(31);
    for from in 0..6 {
        game.apply_move(&mut table, &[Location::Tableau(from), Location::Tableau(11)])
            .unwrap();
    }
    assert!(table.tableau.iter().all(|p| p.top().map_or(true, Card::is_face_up)));
    assert_eq!(table.tableau[11].len(), 10);
}

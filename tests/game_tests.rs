//! End-to-end scenarios driven through the public API.

use baghchal::{CellState, Game, Move, MoveError, Position, Side, UndoError, Victory};

/// A realistic opening: placements answered by tiger moves, ending in a
/// diagonal capture, checked against counters, turn order, and masks.
#[test]
fn test_opening_sequence() {
    let mut game = Game::new();

    // Goat opens in the center.
    game.apply_move(Move::placement(Position::new(2, 2))).unwrap();
    assert_eq!(game.turn(), Side::Tiger);
    assert_eq!(game.goats_to_place(), 19);

    // Tiger advances along the corner diagonal.
    game.apply_move(Move::between(Position::new(0, 0), Position::new(1, 1)))
        .unwrap();
    assert_eq!(game.turn(), Side::Goat);

    // Second goat takes the vacated corner. Safe: the jump over it would
    // land off the board.
    game.apply_move(Move::placement(Position::new(0, 0))).unwrap();

    // The center goat is not safe: the tiger at (1,1) can jump it along
    // the main diagonal onto (3,3).
    let dests = game.destinations_from(Position::new(1, 1));
    assert!(dests.get(Position::new(3, 3)), "capture landing offered");

    game.apply_move(Move::between(Position::new(1, 1), Position::new(3, 3)))
        .unwrap();

    assert_eq!(game.goats_eaten(), 1);
    assert_eq!(game.turn(), Side::Goat);
    assert_eq!(game.board().get(Position::new(1, 1)), CellState::Empty);
    assert_eq!(game.board().get(Position::new(2, 2)), CellState::Empty);
    assert_eq!(game.board().get(Position::new(3, 3)), CellState::Tiger);
    assert_eq!(game.history_len(), 4);
    assert!(!game.is_terminal());
}

/// Undo rewinds an entire game back to the initial position.
#[test]
fn test_undo_all_the_way_back() {
    let mut game = Game::new();
    let initial = game.clone();

    game.apply_move(Move::placement(Position::new(1, 0))).unwrap();
    game.apply_move(Move::between(Position::new(0, 0), Position::new(2, 0)))
        .unwrap();
    game.apply_move(Move::placement(Position::new(3, 2))).unwrap();
    game.apply_move(Move::between(Position::new(2, 0), Position::new(2, 1)))
        .unwrap();

    for _ in 0..4 {
        game.undo().unwrap();
    }

    assert_eq!(game, initial);
    assert_eq!(game.undo(), Err(UndoError::EmptyHistory));
}

/// The engine refuses moves but does not lock itself once terminal;
/// stopping is the caller's job.
#[test]
fn test_no_lockout_after_terminal() {
    let mut game = Game::new();
    let near = Position::new(0, 0);
    let far = Position::new(2, 0);
    let bait = Position::new(1, 0);

    for i in 0..5 {
        game.apply_move(Move::placement(bait)).unwrap();
        let (from, to) = if i % 2 == 0 { (near, far) } else { (far, near) };
        game.apply_move(Move::between(from, to)).unwrap();
    }

    assert!(game.is_terminal());
    assert_eq!(game.outcome(), Some(Victory::Tigers));

    // Still accepts a legal placement; terminal is a query, not a gate.
    assert_eq!(game.apply_move(Move::placement(Position::new(3, 3))), Ok(()));
}

/// Mask queries from a host's point of view: origins then destinations.
#[test]
fn test_mask_driven_selection() {
    let mut game = Game::new();
    game.apply_move(Move::placement(Position::new(2, 2))).unwrap();

    // Tiger turn: pick each offered origin and play its first offered
    // destination; every combination must be accepted.
    let origins = game.selectable_origins();
    assert!(origins.any());
    for origin in origins.positions() {
        let dests = game.destinations_from(origin);
        assert!(dests.any(), "selectable origin with no destinations");
        for dest in dests.positions() {
            let mut copy = game.clone();
            assert_eq!(copy.apply_move(Move::between(origin, dest)), Ok(()));
        }
    }
}

/// Restoring a snapshot where 20 goats wall in all four tigers: goats win
/// by blockade.
#[test]
fn test_blockade_terminal_from_snapshot() {
    let json = r#"{
        "board": { "cells": [
            ["Tiger", "Goat", "Goat",  "Goat", "Tiger"],
            ["Goat",  "Goat", "Empty", "Goat", "Goat"],
            ["Goat",  "Goat", "Goat",  "Goat", "Goat"],
            ["Goat",  "Goat", "Goat",  "Goat", "Goat"],
            ["Tiger", "Goat", "Goat",  "Goat", "Tiger"]
        ]},
        "turn": "Tiger",
        "goats_to_place": 0,
        "goats_eaten": 0,
        "history": []
    }"#;
    let game: Game = serde_json::from_str(json).unwrap();

    assert_eq!(game.board().count(CellState::Goat), 20);
    assert_eq!(game.board().count(CellState::Tiger), 4);
    assert_eq!(game.count_movable_tigers(), 0);
    assert!(game.is_terminal());
    assert_eq!(game.outcome(), Some(Victory::Goats));

    // No tiger move exists; every tiger submission bounces.
    let mut game = game;
    let before = game.clone();
    let result = game.apply_move(Move::between(Position::new(0, 0), Position::new(2, 1)));
    assert_eq!(result, Err(MoveError::IllegalMove));
    assert_eq!(game, before);
}

/// One open landing is enough to keep the goats from winning.
#[test]
fn test_near_blockade_not_terminal() {
    let json = r#"{
        "board": { "cells": [
            ["Tiger", "Goat", "Empty", "Goat", "Tiger"],
            ["Goat",  "Goat", "Empty", "Goat", "Goat"],
            ["Goat",  "Goat", "Goat",  "Goat", "Goat"],
            ["Goat",  "Goat", "Goat",  "Goat", "Goat"],
            ["Tiger", "Goat", "Goat",  "Goat", "Tiger"]
        ]},
        "turn": "Tiger",
        "goats_to_place": 1,
        "goats_eaten": 0,
        "history": []
    }"#;
    let mut game: Game = serde_json::from_str(json).unwrap();

    assert!(!game.is_terminal());
    assert_eq!(game.count_movable_tigers(), 2);

    // The corner tiger eats through the gap.
    game.apply_move(Move::between(Position::new(0, 0), Position::new(2, 0)))
        .unwrap();
    assert_eq!(game.goats_eaten(), 1);
    assert_eq!(game.turn(), Side::Goat);
}

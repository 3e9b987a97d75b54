//! # baghchal
//!
//! A rules engine for Bagh-Chal ("Tigers and Goats"): a two-player
//! asymmetric board game on a 5×5 intersection grid with partial diagonal
//! connectivity. Four tigers try to eat five goats; twenty goats try to
//! blockade every tiger.
//!
//! ## Design Principles
//!
//! 1. **Engine, not application**: board state, legality, execution, turn
//!    management, terminal detection, and undo. Rendering, menus, and input
//!    are the host's problem; the engine exposes query/command operations
//!    and consumes nothing back.
//!
//! 2. **Rejection leaves no trace**: every command validates fully before
//!    mutating, so a failed [`Game::apply_move`] or [`Game::undo`] leaves
//!    the state exactly as it was.
//!
//! 3. **Cheap snapshots**: the undo history is a persistent `im` vector,
//!    so cloning a whole [`Game`] is inexpensive.
//!
//! ## Modules
//!
//! - `core`: positions and the fixed board topology, cells, the board, moves
//! - `rules`: legality probing, movable/empty masks, blockade detection
//! - `game`: the [`Game`] state machine, undo, and error types
//!
//! ## Example
//!
//! ```
//! use baghchal::{Game, Move, Position, Side};
//!
//! let mut game = Game::new();
//! assert_eq!(game.turn(), Side::Goat);
//!
//! // Goats open by placing next to a corner tiger.
//! game.apply_move(Move::placement(Position::new(1, 0))).unwrap();
//!
//! // The tiger eats it: (0,0) jumps over (1,0) onto (2,0).
//! game.apply_move(Move::between(Position::new(0, 0), Position::new(2, 0))).unwrap();
//! assert_eq!(game.goats_eaten(), 1);
//!
//! // Take it back.
//! game.undo().unwrap();
//! assert_eq!(game.goats_eaten(), 0);
//! ```

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, CellState, Move, MoveKind, Position, Side, BOARD_SIZE};

pub use crate::rules::PositionMask;

pub use crate::game::{Game, MoveError, UndoError, Victory, CAPTURES_TO_WIN, TOTAL_GOATS};

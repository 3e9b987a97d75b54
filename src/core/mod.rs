//! Core value types: positions and topology, cells, the board, and moves.
//!
//! Everything here is rules-free data. The `rules` module layers legality
//! on top, and `game` owns the mutable session state.

pub mod board;
pub mod cell;
pub mod moves;
pub mod position;

pub use board::Board;
pub use cell::{CellState, Side};
pub use moves::{Move, MoveKind};
pub use position::{Position, BOARD_SIZE, DIAGONAL_DIRS, ORTHOGONAL_DIRS};

//! The 5×5 board: pure storage with bounds-checked accessors.

use serde::{Deserialize, Serialize};

use super::cell::CellState;
use super::position::{Position, BOARD_SIZE};

/// A 5×5 grid of cell states. No rules knowledge; just get/set and counting.
///
/// Accessors take on-board positions; the rules and game layers validate
/// coordinates before touching the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// An entirely empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The start-of-game layout: tigers in the four corners, rest empty.
    #[must_use]
    pub fn start_position() -> Self {
        let mut board = Self::new();
        for corner in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            board.set(Position::new(corner.0, corner.1), CellState::Tiger);
        }
        board
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Position, state: CellState) {
        self.cells[pos.row as usize][pos.col as usize] = state;
    }

    /// Number of cells holding the given state.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        Position::all().filter(|&p| self.get(p) == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(CellState::Empty), 25);
    }

    #[test]
    fn test_start_position_layout() {
        let board = Board::start_position();

        assert_eq!(board.count(CellState::Tiger), 4);
        assert_eq!(board.count(CellState::Goat), 0);
        assert_eq!(board.count(CellState::Empty), 21);

        for corner in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(
                board.get(Position::new(corner.0, corner.1)),
                CellState::Tiger
            );
        }
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut board = Board::new();
        let pos = Position::new(2, 3);

        board.set(pos, CellState::Goat);
        assert_eq!(board.get(pos), CellState::Goat);

        board.set(pos, CellState::Empty);
        assert_eq!(board.get(pos), CellState::Empty);
    }
}

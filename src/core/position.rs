//! Board coordinates and the fixed Bagh-Chal topology.
//!
//! The board is a 5×5 grid of intersections. Every intersection is connected
//! to its orthogonal neighbors; only intersections whose coordinate sum is
//! even additionally carry diagonal edges (the classic alquerque graph:
//! corners, edge midpoints, center, and the four quadrant centers).
//!
//! Coordinates use `i8` so that neighbor arithmetic can step off the board
//! transiently; [`Position::is_on_board`] gates before any board access.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: i8 = 5;

/// Offsets of the four orthogonal neighbors.
pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Offsets of the four diagonal neighbors.
///
/// Only usable from positions where [`Position::has_diagonals`] is true.
pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

/// Which intersections carry diagonal edges, indexed `[row][col]`.
///
/// Fixed data of the canonical board graph, not derived logic.
const HAS_DIAGONALS: [[bool; 5]; 5] = [
    [true, false, true, false, true],
    [false, true, false, true, false],
    [true, false, true, false, true],
    [false, true, false, true, false],
    [true, false, true, false, true],
];

/// A grid intersection, `(col, row)` with both components in `[0, 5)` when
/// on the board. Equality is component-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    #[must_use]
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Check that both components lie on the 5×5 grid.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.col >= 0 && self.col < BOARD_SIZE && self.row >= 0 && self.row < BOARD_SIZE
    }

    /// Whether this intersection carries diagonal edges.
    ///
    /// Only meaningful for on-board positions.
    #[must_use]
    pub fn has_diagonals(self) -> bool {
        self.is_on_board() && HAS_DIAGONALS[self.row as usize][self.col as usize]
    }

    /// The position offset by `(dc, dr)`, or `None` if it leaves the board.
    #[must_use]
    pub fn step(self, dc: i8, dr: i8) -> Option<Self> {
        let next = Self::new(self.col + dc, self.row + dr);
        next.is_on_board().then_some(next)
    }

    /// Chebyshev distance: the larger of the two component deltas.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> i8 {
        (self.col - other.col).abs().max((self.row - other.row).abs())
    }

    /// The cell halfway between two positions a straight jump apart.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.col + other.col) / 2, (self.row + other.row) / 2)
    }

    /// Iterate over all 25 on-board positions.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Self::new(col, row)))
    }
}

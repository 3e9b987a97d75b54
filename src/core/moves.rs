//! Move representation and shape classification.
//!
//! A move is an origin plus an optional destination. An absent destination
//! encodes goat placement; a present one encodes token movement. The move's
//! category is recoverable from its shape alone, which is what lets the
//! undo path reverse a history entry without any stored metadata.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A candidate or executed move.
///
/// `to == None` is a placement (goat only). Otherwise Chebyshev distance 1
/// is a step and distance 2 along a straight line is a capture-jump; any
/// other shape is unclassifiable and rejected by the game layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Option<Position>,
}

/// The category a move's shape implies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// A goat placed onto an empty intersection.
    Placement,
    /// A one-cell slide along a board edge.
    Step,
    /// A tiger jump over the cell at `over`, which holds the eaten goat.
    Jump { over: Position },
}

impl Move {
    /// A placement of a goat at `at`.
    #[must_use]
    pub const fn placement(at: Position) -> Self {
        Self { from: at, to: None }
    }

    /// A movement from one intersection to another.
    #[must_use]
    pub const fn between(from: Position, to: Position) -> Self {
        Self { from, to: Some(to) }
    }

    /// Whether this move changes both coordinates (runs along a diagonal).
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        match self.to {
            Some(to) => to.col != self.from.col && to.row != self.from.row,
            None => false,
        }
    }

    /// Classify by shape. `None` means the shape matches no legal category
    /// (zero distance, distance above 2, or a crooked two-cell move).
    #[must_use]
    pub fn kind(&self) -> Option<MoveKind> {
        let Some(to) = self.to else {
            return Some(MoveKind::Placement);
        };

        let dc = to.col - self.from.col;
        let dr = to.row - self.from.row;
        match dc.abs().max(dr.abs()) {
            1 => Some(MoveKind::Step),
            // A jump must be straight so the eaten goat sits on a grid point.
            2 if dc % 2 == 0 && dr % 2 == 0 => Some(MoveKind::Jump {
                over: self.from.midpoint(to),
            }),
            _ => None,
        }
    }
}

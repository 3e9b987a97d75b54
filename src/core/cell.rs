//! Cell contents and the side to move.

use serde::{Deserialize, Serialize};

/// What occupies an intersection. Exactly one token, or nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Goat,
    Tiger,
}

/// One of the two factions. Doubles as the turn indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Goat,
    Tiger,
}

impl Side {
    /// The token this side moves. Total mapping, used uniformly by legality
    /// and execution logic.
    #[must_use]
    pub const fn token(self) -> CellState {
        match self {
            Side::Goat => CellState::Goat,
            Side::Tiger => CellState::Tiger,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Goat => Side::Tiger,
            Side::Tiger => Side::Goat,
        }
    }
}

//! Boolean position masks, the query artifact handed to presentation code.

use serde::{Deserialize, Serialize};

use crate::core::{Position, BOARD_SIZE};

/// A 5×5 grid of booleans describing either selectable origins or valid
/// destinations for a chosen origin. Never persisted; rebuilt per query.
///
/// Callers must not depend on any enumeration order of the set bits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionMask {
    bits: [[bool; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl PositionMask {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> bool {
        self.bits[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Position, value: bool) {
        self.bits[pos.row as usize][pos.col as usize] = value;
    }

    /// Whether any position is marked.
    #[must_use]
    pub fn any(&self) -> bool {
        self.bits.iter().flatten().any(|&b| b)
    }

    /// Number of marked positions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().flatten().filter(|&&b| b).count()
    }

    /// Iterate over the marked positions.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&p| self.get(p))
    }
}

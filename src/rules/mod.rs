//! Move legality over a board: destination probing and blockade detection.

pub mod legality;
pub mod mask;

pub use legality::{can_move_from, destinations, empty_mask, is_blocked, movable_mask};
pub use mask::PositionMask;

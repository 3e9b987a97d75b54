//! Move legality: destination probing, movable masks, blockade detection.
//!
//! All functions here are pure queries over a [`Board`]; turn handling and
//! mutation live in the `game` module. Probing runs in two modes sharing
//! one routine: the orthogonal directions are always checked, the diagonal
//! directions only from intersections that carry diagonal edges.
//!
//! A probe can either short-circuit on the first destination found (used
//! for blocked-state checks and origin highlighting) or fill a full
//! [`PositionMask`] of destinations (used once an origin is chosen).

use crate::core::{Board, CellState, Position, Side, DIAGONAL_DIRS, ORTHOGONAL_DIRS};

use super::mask::PositionMask;

/// Probe one direction set from `origin`.
///
/// Marks step destinations (adjacent empty cells) and, when the origin
/// holds a tiger, capture destinations (empty cell two steps out with a
/// goat in between). With `dest == None` the probe returns on the first
/// hit; otherwise it marks every destination and reports whether any
/// exists.
fn probe(
    board: &Board,
    origin: Position,
    dirs: [(i8, i8); 4],
    mut dest: Option<&mut PositionMask>,
) -> bool {
    let mut possible = false;

    for (dc, dr) in dirs {
        let Some(next) = origin.step(dc, dr) else {
            continue;
        };
        if board.get(next) == CellState::Empty {
            match dest.as_deref_mut() {
                None => return true,
                Some(mask) => {
                    mask.set(next, true);
                    possible = true;
                }
            }
        }
    }

    if board.get(origin) == CellState::Tiger {
        // Tigers can additionally jump an adjacent goat into the empty
        // cell beyond it, along the same direction set.
        for (dc, dr) in dirs {
            let Some(over) = origin.step(dc, dr) else {
                continue;
            };
            let Some(landing) = origin.step(2 * dc, 2 * dr) else {
                continue;
            };
            if board.get(over) == CellState::Goat && board.get(landing) == CellState::Empty {
                match dest.as_deref_mut() {
                    None => return true,
                    Some(mask) => {
                        mask.set(landing, true);
                        possible = true;
                    }
                }
            }
        }
    }

    possible
}

/// Whether the token at `pos` has at least one legal destination.
#[must_use]
pub fn can_move_from(board: &Board, pos: Position) -> bool {
    probe(board, pos, ORTHOGONAL_DIRS, None)
        || (pos.has_diagonals() && probe(board, pos, DIAGONAL_DIRS, None))
}

/// All legal destinations for the token at `pos`.
///
/// Includes capture landings when `pos` holds a tiger. Empty origins yield
/// an empty mask (an empty cell has no token to move).
#[must_use]
pub fn destinations(board: &Board, pos: Position) -> PositionMask {
    let mut mask = PositionMask::new();
    if board.get(pos) == CellState::Empty {
        return mask;
    }
    probe(board, pos, ORTHOGONAL_DIRS, Some(&mut mask));
    if pos.has_diagonals() {
        probe(board, pos, DIAGONAL_DIRS, Some(&mut mask));
    }
    mask
}

/// Mask of `side`'s tokens that have at least one legal destination.
#[must_use]
pub fn movable_mask(board: &Board, side: Side) -> PositionMask {
    let token = side.token();
    let mut mask = PositionMask::new();
    for pos in Position::all() {
        if board.get(pos) == token {
            mask.set(pos, can_move_from(board, pos));
        }
    }
    mask
}

/// Mask of all empty cells (goat placement targets).
#[must_use]
pub fn empty_mask(board: &Board) -> PositionMask {
    let mut mask = PositionMask::new();
    for pos in Position::all() {
        if board.get(pos) == CellState::Empty {
            mask.set(pos, true);
        }
    }
    mask
}

/// Whether no token of `side` can move at all.
#[must_use]
pub fn is_blocked(board: &Board, side: Side) -> bool {
    let token = side.token();
    Position::all().all(|pos| board.get(pos) != token || !can_move_from(board, pos))
}

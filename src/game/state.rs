//! The game state machine: turns, placement, movement, capture, and undo.
//!
//! ## State
//!
//! A [`Game`] owns the board, the side to move, the two goat counters, and
//! the history of executed moves. The conservation invariant holds for
//! every reachable state:
//!
//! ```text
//! goats on board + goats to place + goats eaten == 20
//! ```
//!
//! ## Turn rule
//!
//! A placement or step hands the turn to the opponent. A capture-jump
//! always hands the turn to the goats (only tigers capture).
//!
//! ## Undo
//!
//! The history is an append/pop stack. Undo infers each entry's category
//! from its shape and reverses it without re-validation; history entries
//! are trusted to come from successful [`Game::apply_move`] calls.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, CellState, Move, MoveKind, Position, Side};
use crate::rules::{self, PositionMask};

use super::error::{MoveError, UndoError};

/// Goats the goat player starts with.
pub const TOTAL_GOATS: u8 = 20;

/// Eaten goats at which the tigers win.
pub const CAPTURES_TO_WIN: u8 = 5;

/// Who won a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Victory {
    /// Five goats eaten.
    Tigers,
    /// Every tiger blockaded.
    Goats,
}

/// One Bagh-Chal session.
///
/// Created once and reset for each new game; mutated only by
/// [`Game::apply_move`], [`Game::undo`], and [`Game::reset`]. Cloning is
/// cheap (the history is a persistent vector), so hosts may snapshot
/// freely. The engine does not lock itself after the game ends; callers
/// stop submitting moves once [`Game::is_terminal`] reports true.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Side,
    goats_to_place: u8,
    goats_eaten: u8,
    history: Vector<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game: tigers in the corners, 20 goats to place, goats to
    /// move first, empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::start_position(),
            turn: Side::Goat,
            goats_to_place: TOTAL_GOATS,
            goats_eaten: 0,
            history: Vector::new(),
        }
    }

    /// Reinitialize to the start-of-game layout, clearing the history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn goats_to_place(&self) -> u8 {
        self.goats_to_place
    }

    #[must_use]
    pub fn goats_eaten(&self) -> u8 {
        self.goats_eaten
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Positions the side to move may pick up (or, during the placement
    /// phase, place onto).
    ///
    /// Tiger turn: tigers with at least one destination. Goat turn with
    /// placements remaining: every empty cell. Goat turn afterwards: goats
    /// with at least one step.
    #[must_use]
    pub fn selectable_origins(&self) -> PositionMask {
        match self.turn {
            Side::Tiger => rules::movable_mask(&self.board, Side::Tiger),
            Side::Goat if self.goats_to_place > 0 => rules::empty_mask(&self.board),
            Side::Goat => rules::movable_mask(&self.board, Side::Goat),
        }
    }

    /// Destinations for the token at `origin`, empty unless the origin
    /// holds a token of the side to move.
    #[must_use]
    pub fn destinations_from(&self, origin: Position) -> PositionMask {
        if origin.is_on_board() && self.board.get(origin) == self.turn.token() {
            rules::destinations(&self.board, origin)
        } else {
            PositionMask::new()
        }
    }

    /// Every legal move for the side to move.
    ///
    /// During the placement phase this is one placement per empty cell;
    /// otherwise one movement per (movable token, destination) pair.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Move; 64]> {
        let mut moves = SmallVec::new();
        if self.turn == Side::Goat && self.goats_to_place > 0 {
            moves.extend(
                rules::empty_mask(&self.board)
                    .positions()
                    .map(Move::placement),
            );
            return moves;
        }

        let token = self.turn.token();
        for from in Position::all() {
            if self.board.get(from) != token {
                continue;
            }
            for to in rules::destinations(&self.board, from).positions() {
                moves.push(Move::between(from, to));
            }
        }
        moves
    }

    /// Tigers with at least one legal destination. UI diagnostic.
    #[must_use]
    pub fn count_movable_tigers(&self) -> usize {
        rules::movable_mask(&self.board, Side::Tiger).count()
    }

    /// Whether the game is over: five goats eaten, or no tiger can move.
    ///
    /// Computed on demand, never cached.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Victory> {
        if self.goats_eaten >= CAPTURES_TO_WIN {
            Some(Victory::Tigers)
        } else if rules::is_blocked(&self.board, Side::Tiger) {
            Some(Victory::Goats)
        } else {
            None
        }
    }

    // === Commands ===

    /// Validate and execute one move for the side to move.
    ///
    /// On `Err` the state is untouched; no partial mutation is observable.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if !mv.from.is_on_board() {
            return Err(MoveError::InvalidCoordinate);
        }

        if self.turn == Side::Goat && self.goats_to_place > 0 {
            // Placement phase: `mv.from` names the cell to fill, any
            // destination the caller supplied is ignored.
            if self.board.get(mv.from) != CellState::Empty {
                return Err(MoveError::IllegalMove);
            }
            self.board.set(mv.from, CellState::Goat);
            self.goats_to_place -= 1;
            self.turn = Side::Tiger;
            self.history.push_back(Move::placement(mv.from));
            return Ok(());
        }

        let Some(to) = mv.to else {
            return Err(MoveError::IllegalMove);
        };
        if !to.is_on_board() {
            return Err(MoveError::InvalidCoordinate);
        }
        if to == mv.from {
            return Err(MoveError::IllegalMove);
        }
        if mv.is_diagonal() && !mv.from.has_diagonals() {
            return Err(MoveError::IllegalMove);
        }
        if self.board.get(mv.from) == CellState::Empty
            || self.board.get(to) != CellState::Empty
        {
            return Err(MoveError::IllegalMove);
        }

        match mv.kind() {
            Some(MoveKind::Step) => {
                let token = self.board.get(mv.from);
                if token != self.turn.token() {
                    return Err(MoveError::IllegalMove);
                }
                self.board.set(mv.from, CellState::Empty);
                self.board.set(to, token);
                self.turn = self.turn.opponent();
                self.history.push_back(mv);
                Ok(())
            }
            Some(MoveKind::Jump { over }) => {
                if self.turn != Side::Tiger || self.board.get(mv.from) != CellState::Tiger {
                    return Err(MoveError::IllegalMove);
                }
                if self.board.get(over) != CellState::Goat {
                    return Err(MoveError::IllegalMove);
                }
                self.board.set(mv.from, CellState::Empty);
                self.board.set(over, CellState::Empty);
                self.board.set(to, CellState::Tiger);
                self.goats_eaten += 1;
                self.turn = Side::Goat;
                self.history.push_back(mv);
                Ok(())
            }
            Some(MoveKind::Placement) | None => Err(MoveError::IllegalMove),
        }
    }

    /// Pop the most recent move and reverse it.
    ///
    /// Each entry's category is inferred from its shape: no destination was
    /// a placement (made by goats), distance 1 a step, distance 2 a capture
    /// (made by tigers). Entries are trusted to come from successful
    /// [`Game::apply_move`] calls and are not re-validated.
    pub fn undo(&mut self) -> Result<Move, UndoError> {
        let mv = self.history.pop_back().ok_or(UndoError::EmptyHistory)?;

        match mv.kind() {
            Some(MoveKind::Placement) => {
                self.board.set(mv.from, CellState::Empty);
                self.goats_to_place += 1;
                self.turn = Side::Goat;
            }
            Some(MoveKind::Step) => {
                // `mv.to` is present for any classified step.
                if let Some(to) = mv.to {
                    let token = self.board.get(to);
                    self.board.set(to, CellState::Empty);
                    self.board.set(mv.from, token);
                    self.turn = self.turn.opponent();
                }
            }
            Some(MoveKind::Jump { over }) => {
                if let Some(to) = mv.to {
                    self.board.set(to, CellState::Empty);
                    self.board.set(over, CellState::Goat);
                    self.board.set(mv.from, CellState::Tiger);
                    self.goats_eaten -= 1;
                    self.turn = Side::Tiger;
                }
            }
            None => {
                debug_assert!(false, "unclassifiable move in history");
            }
        }

        Ok(mv)
    }
}

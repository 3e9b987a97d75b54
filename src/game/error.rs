//! Caller-visible rejection reasons.
//!
//! Every rejection is a recoverable outcome: the operation returns an `Err`
//! and the game state is guaranteed untouched. The engine never panics for
//! these, and carries no logging or retry policy of its own.

use std::error::Error;
use std::fmt;

/// Why a submitted move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// A supplied coordinate lies outside the board.
    InvalidCoordinate,
    /// Structurally plausible but rule-violating: occupied destination,
    /// wrong mover, unreachable distance, missing capture target, or a
    /// diagonal attempted where the board has no edge.
    IllegalMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidCoordinate => write!(f, "coordinate is outside the board"),
            MoveError::IllegalMove => write!(f, "move violates the rules"),
        }
    }
}

impl Error for MoveError {}

/// Why an undo request did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoError {
    /// No moves have been recorded.
    EmptyHistory,
}

impl fmt::Display for UndoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoError::EmptyHistory => write!(f, "no moves to undo"),
        }
    }
}

impl Error for UndoError {}

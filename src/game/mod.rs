//! The game state machine and its caller-visible errors.

pub mod error;
pub mod state;

pub use error::{MoveError, UndoError};
pub use state::{Game, Victory, CAPTURES_TO_WIN, TOTAL_GOATS};

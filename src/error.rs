//! Error types for the terminal game.

use derive_more::{Display, Error, From};
use tictactoe_core::BoardError;

/// Failure that ends a round or the session.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// Standard input reached end of file.
    #[display("Input closed")]
    InputClosed,
    /// Asked for a move on a full board.
    #[display("No valid moves available")]
    NoEmptyCells,
    /// A move was rejected by the board.
    #[display("Board rejected move: {}", _0)]
    #[from]
    Board(#[error(source)] BoardError),
    /// Reading or writing the terminal failed.
    #[display("Terminal I/O failed: {}", _0)]
    #[from]
    Io(#[error(source)] std::io::Error),
}

impl GameError {
    /// Checks whether an `anyhow` chain bottoms out in closed input.
    pub fn is_input_closed(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<GameError>(), Some(GameError::InputClosed))
    }
}

/// Rejected move typed by the human. Reported and re-prompted, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Input did not parse as an integer.
    #[display("Invalid input.")]
    NotANumber(#[error(not(source))] String),
    /// Number outside 1-9.
    #[display("Invalid input.")]
    OutOfRange(#[error(not(source))] i64),
    /// Cell (0-based) already holds a mark.
    #[display("This space is not available.")]
    Occupied(#[error(not(source))] usize),
}

//! Pure tic-tac-toe board and rules.
//!
//! Everything here is synchronous and free of I/O. The board is a fixed
//! nine-cell array and the rules are plain functions over it, so the
//! terminal front end (and the tests) can evaluate positions without
//! touching a console.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod outcome;
mod types;

pub mod rules;

pub use error::BoardError;
pub use outcome::GameResult;
pub use rules::{has_tie, has_winner, winner};
pub use types::{Board, Cell, Mark, BOARD_SIZE};

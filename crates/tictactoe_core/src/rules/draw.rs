//! Tie detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full.
///
/// A full board may also hold a winning line; this predicate does not
/// care. Check for a winner first.
#[instrument]
pub fn has_tie(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

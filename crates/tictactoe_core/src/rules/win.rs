//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, columns left to right, then the main diagonal and
/// the top-right/center/bottom-right triple. When more than one line is
/// complete the first one here decides the reported mark.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 8],
];

/// Returns the mark owning the first complete line, if any.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        cells[a]
            .mark()
            .filter(|_| cells[b] == cells[a] && cells[c] == cells[a])
    })
}

/// Checks if any line is complete.
#[instrument]
pub fn has_winner(board: &Board) -> bool {
    winner(board).is_some()
}

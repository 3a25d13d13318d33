//! Derived game result.

use crate::rules::{has_tie, winner};
use crate::{Board, Mark};
use tracing::instrument;

/// Status of a round, recomputed from the board after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Moves remain and nobody has won.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// The board filled with no winning line.
    Tie,
}

impl GameResult {
    /// Evaluates the board. A winning line takes precedence over a full board.
    #[instrument]
    pub fn of(board: &Board) -> Self {
        if let Some(mark) = winner(board) {
            GameResult::Win(mark)
        } else if has_tie(board) {
            GameResult::Tie
        } else {
            GameResult::InProgress
        }
    }

    /// Whether the round has ended.
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }

    /// Message shown to the player when the round ends.
    pub fn announcement(self) -> Option<String> {
        match self {
            GameResult::InProgress => None,
            GameResult::Win(mark) => Some(format!("Player {} won the game!", mark)),
            GameResult::Tie => Some("It's a tie!".to_string()),
        }
    }
}

//! Human player that types positions at the terminal.

use super::Player;
use crate::{InputError, Terminal};
use anyhow::Result;
use tictactoe_core::{Board, Mark};
use tracing::{debug, instrument};

/// Prompt shown before each move.
pub const MOVE_PROMPT: &str = "Choose your position (1-9): ";

/// Human player reading 1-based positions from the terminal.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    mark: Mark,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// Validates one line of input against the board.
    ///
    /// Accepts an integer in 1-9 naming an empty cell and returns its
    /// 0-based index.
    #[instrument(skip(board))]
    pub fn parse_choice(input: &str, board: &Board) -> Result<usize, InputError> {
        let number: i64 = input
            .trim()
            .parse()
            .map_err(|_| InputError::NotANumber(input.to_string()))?;

        if !(1..=9).contains(&number) {
            return Err(InputError::OutOfRange(number));
        }

        let index = (number - 1) as usize;
        if !board.is_empty(index) {
            return Err(InputError::Occupied(index));
        }

        Ok(index)
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip_all)]
    async fn get_move(&mut self, board: &Board, terminal: &mut dyn Terminal) -> Result<usize> {
        loop {
            let input = terminal.read_line(MOVE_PROMPT).await?;
            match Self::parse_choice(&input, board) {
                Ok(index) => {
                    debug!(player = %self.name, position = index, "Human chose position");
                    return Ok(index);
                }
                Err(e) => {
                    debug!(error = ?e, "Rejected input");
                    terminal.write_line(&format!("Error: {}", e)).await?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}

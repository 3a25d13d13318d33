//! Player trait and implementations.

mod human;
mod random;

pub use human::{HumanPlayer, MOVE_PROMPT};
pub use random::RandomPlayer;

use crate::Terminal;
use anyhow::Result;
use tictactoe_core::{Board, Mark};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns the index (0-8) of an empty cell. The caller places the
    /// player's mark there.
    async fn get_move(&mut self, board: &Board, terminal: &mut dyn Terminal) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the mark this player places.
    fn mark(&self) -> Mark;
}

//! Computer opponent that picks a uniformly random empty cell.

use super::Player;
use crate::{GameError, Terminal};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tictactoe_core::{Board, Mark};
use tracing::{debug, instrument};

/// Random opponent.
#[derive(Debug)]
pub struct RandomPlayer<R = StdRng> {
    name: String,
    mark: Mark,
    rng: R,
}

impl RandomPlayer<StdRng> {
    /// Creates a random player seeded from the operating system.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self::with_rng(name, mark, StdRng::from_os_rng())
    }

    /// Creates a random player with a fixed seed, for reproducible games.
    pub fn seeded(name: impl Into<String>, mark: Mark, seed: u64) -> Self {
        Self::with_rng(name, mark, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random player drawing from `rng`.
    pub fn with_rng(name: impl Into<String>, mark: Mark, rng: R) -> Self {
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }

    /// Picks one empty cell index uniformly at random.
    #[instrument(skip_all, fields(player = %self.name))]
    pub fn choose_index(&mut self, board: &Board) -> Result<usize, GameError> {
        let empty = board.empty_indices();
        let index = empty
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoEmptyCells)?;
        debug!(position = index, candidates = empty.len(), "Random player chose position");
        Ok(index)
    }
}

#[async_trait::async_trait]
impl<R: Rng + Send> Player for RandomPlayer<R> {
    async fn get_move(&mut self, board: &Board, _terminal: &mut dyn Terminal) -> Result<usize> {
        Ok(self.choose_index(board)?)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}

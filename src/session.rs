//! Round and session orchestration between two players.

use crate::players::Player;
use crate::{BoardRenderer, Terminal};
use anyhow::Result;
use derive_getters::Getters;
use tictactoe_core::{Board, GameResult};
use tracing::{debug, info, instrument};

/// Prompt shown when a round ends.
pub const REPLAY_PROMPT: &str = "Play again? (Y/n) ";

/// Whether a replay answer starts another round.
///
/// Only an empty line, `Y` or `y` count as yes; the match is exact.
pub fn wants_replay(answer: &str) -> bool {
    matches!(answer, "" | "Y" | "y")
}

/// Tally of finished rounds in this process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Rounds played to completion.
    rounds: u32,
    /// Rounds won by the human.
    player_wins: u32,
    /// Rounds won by the opponent.
    opponent_wins: u32,
    /// Rounds ending with a full board.
    ties: u32,
}

impl SessionSummary {
    fn record(&mut self, result: GameResult, human: tictactoe_core::Mark) {
        self.rounds += 1;
        match result {
            GameResult::Win(mark) if mark == human => self.player_wins += 1,
            GameResult::Win(_) => self.opponent_wins += 1,
            GameResult::Tie => self.ties += 1,
            GameResult::InProgress => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Human,
    Opponent,
}

/// Runs rounds of human versus opponent until the human declines a replay.
pub struct Session<T> {
    human: Box<dyn Player>,
    opponent: Box<dyn Player>,
    renderer: Box<dyn BoardRenderer>,
    terminal: T,
}

impl<T: Terminal> Session<T> {
    /// Creates a new session. The human always moves first.
    pub fn new(
        human: Box<dyn Player>,
        opponent: Box<dyn Player>,
        renderer: Box<dyn BoardRenderer>,
        terminal: T,
    ) -> Self {
        Self {
            human,
            opponent,
            renderer,
            terminal,
        }
    }

    /// Returns the terminal, consuming the session.
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Plays rounds until the replay prompt is declined.
    #[instrument(skip_all)]
    pub async fn run(&mut self) -> Result<SessionSummary> {
        info!(
            human = self.human.name(),
            opponent = self.opponent.name(),
            "Starting session"
        );

        let mut summary = SessionSummary::default();
        loop {
            let result = self.play_round().await?;
            summary.record(result, self.human.mark());

            if !self.ask_replay().await? {
                break;
            }
            debug!(rounds = summary.rounds, "Starting another round");
        }

        info!(
            rounds = summary.rounds,
            player_wins = summary.player_wins,
            opponent_wins = summary.opponent_wins,
            ties = summary.ties,
            "Session finished"
        );
        Ok(summary)
    }

    /// Plays a single round on a fresh board and announces the result.
    #[instrument(skip_all)]
    pub async fn play_round(&mut self) -> Result<GameResult> {
        let mut board = Board::new();
        self.show(&board).await?;

        let result = loop {
            let result = self.half_turn(Turn::Human, &mut board).await?;
            if result.is_over() {
                break result;
            }

            let result = self.half_turn(Turn::Opponent, &mut board).await?;
            if result.is_over() {
                break result;
            }
        };

        info!(?result, "Round over");
        if let Some(message) = result.announcement() {
            self.terminal.write_line(&message).await?;
        }
        Ok(result)
    }

    async fn half_turn(&mut self, turn: Turn, board: &mut Board) -> Result<GameResult> {
        let player = match turn {
            Turn::Human => &mut self.human,
            Turn::Opponent => &mut self.opponent,
        };

        let position = player.get_move(board, &mut self.terminal).await?;
        board.place(position, player.mark())?;
        debug!(player = player.name(), position, "Move made");

        self.show(board).await?;
        Ok(GameResult::of(board))
    }

    async fn show(&mut self, board: &Board) -> Result<()> {
        let grid = self.renderer.render(board);
        self.terminal.write_line("").await?;
        self.terminal.write_line(&grid).await?;
        self.terminal.write_line("").await?;
        Ok(())
    }

    async fn ask_replay(&mut self) -> Result<bool> {
        self.terminal.write_line("").await?;
        let answer = self.terminal.read_line(REPLAY_PROMPT).await?;
        Ok(wants_replay(&answer))
    }
}

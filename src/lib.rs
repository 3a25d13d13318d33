//! Terminal tic-tac-toe against a random opponent.
//!
//! # Architecture
//!
//! - **Rules**: board and win/tie evaluation live in `tictactoe_core`
//! - **Players**: [`HumanPlayer`] reads positions, [`RandomPlayer`] picks empty cells
//! - **Session**: alternates turns, announces results, asks for replays
//! - **Presentation**: [`BoardRenderer`] implementations, chosen by [`DisplayStyle`]
//! - **Console**: the [`Terminal`] capability over async readers and writers
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{Console, DisplayStyle, HumanPlayer, Mark, RandomPlayer, Session};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut session = Session::new(
//!     Box::new(HumanPlayer::new("You", Mark::X)),
//!     Box::new(RandomPlayer::new("Computer", Mark::O)),
//!     DisplayStyle::Numbered.renderer(),
//!     Console::stdio(),
//! );
//! let summary = session.run().await?;
//! println!("{} rounds", summary.rounds());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod error;
mod render;
mod session;

pub mod players;

pub use cli::Cli;
pub use console::{Console, Terminal};
pub use error::{GameError, InputError};
pub use players::{HumanPlayer, Player, RandomPlayer};
pub use render::{BoardRenderer, DisplayStyle, NumberedRenderer, SimpleRenderer, ROW_SEPARATOR};
pub use session::{wants_replay, Session, SessionSummary, REPLAY_PROMPT};

pub use players::MOVE_PROMPT;
pub use tictactoe_core::{Board, BoardError, Cell, GameResult, Mark};

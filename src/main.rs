//! Tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Console, DisplayStyle, GameError, HumanPlayer, Mark, RandomPlayer, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    let outcome = runtime.block_on(play(cli.display_style()));

    // A pending stdin read would otherwise block runtime shutdown.
    runtime.shutdown_background();
    outcome
}

/// Runs the interactive session, guarded by the Ctrl-C handler.
#[instrument]
async fn play(style: DisplayStyle) -> Result<()> {
    let mut session = Session::new(
        Box::new(HumanPlayer::new("You", Mark::X)),
        Box::new(RandomPlayer::new("Computer", Mark::O)),
        style.renderer(),
        Console::stdio(),
    );

    tokio::select! {
        result = session.run() => match result {
            Ok(_) => Ok(()),
            Err(e) if GameError::is_input_closed(&e) => {
                info!("Input closed, exiting");
                farewell();
                Ok(())
            }
            Err(e) => Err(e),
        },
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl-C")?;
            info!("Interrupted, exiting");
            farewell();
            Ok(())
        }
    }
}

fn farewell() {
    println!();
    println!("Bye-bye!");
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

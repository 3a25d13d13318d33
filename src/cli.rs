//! Command-line interface for tictactoe.

use crate::DisplayStyle;
use clap::{ArgAction, Parser};

/// Tic-tac-toe against a computer that moves at random.
///
/// Positional style arguments start with a single hyphen, so clap's
/// short flags are disabled and help is available only as `--help`.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a random opponent", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Board style: -simple or -numbered (default)
    #[arg(value_name = "STYLE", allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Resolves the display style. Anything but a single recognized
    /// argument falls back to [`DisplayStyle::Numbered`].
    pub fn display_style(&self) -> DisplayStyle {
        match self.args.as_slice() {
            [arg] => arg.parse().unwrap_or_default(),
            _ => DisplayStyle::default(),
        }
    }
}

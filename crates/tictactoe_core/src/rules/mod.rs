//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The tie check does not
//! look for winners; callers decide precedence (see
//! [`GameResult::of`](crate::GameResult::of)).

pub mod draw;
pub mod win;

pub use draw::has_tie;
pub use win::{has_winner, winner, LINES};

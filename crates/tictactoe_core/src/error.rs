//! Board error types.

use derive_more::{Display, Error};

/// Rejected board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
    /// Target cell already holds a mark.
    #[display("Position {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

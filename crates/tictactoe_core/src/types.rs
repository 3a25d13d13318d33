//! Core domain types for tic-tac-toe.

use crate::BoardError;
use std::fmt;
use tracing::instrument;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Symbol placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Mark {
    /// The human's mark.
    X,
    /// The computer opponent's mark.
    O,
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell claimed by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str(" "),
            Cell::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major, so index 0 is the top-left corner and
/// index 8 the bottom-right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index.
    ///
    /// Only empty cells may be written; overwriting a mark is rejected.
    #[instrument(skip(self))]
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), BoardError> {
        match self.cells.get(index) {
            None => Err(BoardError::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => Err(BoardError::Occupied(index)),
            Some(Cell::Empty) => {
                self.cells[index] = cell;
                Ok(())
            }
        }
    }

    /// Places `mark` at the given index.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        self.set(index, Cell::Occupied(mark))
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Indices of every empty cell, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }
}

//! Board presentation.
//!
//! Rendering produces plain strings so the game loop never touches
//! terminal styling directly.

use crossterm::style::Stylize;
use tictactoe_core::{Board, Cell, BOARD_SIZE};
use tracing::instrument;

/// Separator printed between board rows.
pub const ROW_SEPARATOR: &str = "-----";

/// Draws a board as text.
pub trait BoardRenderer: Send + Sync {
    /// Renders the 3x3 grid: three rows joined by [`ROW_SEPARATOR`] lines,
    /// columns separated by `|`, no trailing newline.
    fn render(&self, board: &Board) -> String;
}

/// How the board is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum DisplayStyle {
    /// Bare marks, spaces for empty cells, no color.
    #[strum(serialize = "-simple")]
    Simple,
    /// Colored marks with position numbers in empty cells.
    #[default]
    #[strum(serialize = "-numbered")]
    Numbered,
}

impl DisplayStyle {
    /// Returns the renderer for this style.
    #[instrument]
    pub fn renderer(self) -> Box<dyn BoardRenderer> {
        match self {
            DisplayStyle::Simple => Box::new(SimpleRenderer),
            DisplayStyle::Numbered => Box::new(NumberedRenderer),
        }
    }
}

/// Plain renderer showing raw mark characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl BoardRenderer for SimpleRenderer {
    fn render(&self, board: &Board) -> String {
        grid(board, |_, cell| cell.to_string())
    }
}

/// Colored renderer labelling empty cells with their 1-based position.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberedRenderer;

impl BoardRenderer for NumberedRenderer {
    fn render(&self, board: &Board) -> String {
        grid(board, |index, cell| match cell {
            Cell::Empty => (index + 1).to_string().dark_yellow().to_string(),
            Cell::Occupied(mark) => mark.to_string().dark_red().to_string(),
        })
    }
}

fn grid(board: &Board, label: impl Fn(usize, Cell) -> String) -> String {
    let cells = board.cells();
    (0..BOARD_SIZE)
        .step_by(3)
        .map(|start| {
            (start..start + 3)
                .map(|index| label(index, cells[index]))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(format!("\n{}\n", ROW_SEPARATOR).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use tictactoe_core::Mark;

    /// Drops ANSI escape sequences (`ESC [ ... letter`).
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        board
    }

    #[test]
    fn test_simple_render() {
        let text = SimpleRenderer.render(&sample_board());
        assert_eq!(text, "X| | \n-----\n |O| \n-----\n | | ");
    }

    #[test]
    fn test_numbered_render_labels_empty_cells() {
        let text = strip_ansi(&NumberedRenderer.render(&sample_board()));
        assert_eq!(text, "X|2|3\n-----\n4|O|6\n-----\n7|8|9");
    }

    #[test]
    fn test_style_from_argument() {
        assert_eq!(DisplayStyle::from_str("-simple"), Ok(DisplayStyle::Simple));
        assert_eq!(DisplayStyle::from_str("-numbered"), Ok(DisplayStyle::Numbered));
        assert!(DisplayStyle::from_str("simple").is_err());
        assert_eq!(DisplayStyle::default(), DisplayStyle::Numbered);
    }

    #[test]
    fn test_every_style_draws_three_rows() {
        for style in DisplayStyle::iter() {
            let text = strip_ansi(&style.renderer().render(&Board::new()));
            let lines: Vec<_> = text.lines().collect();
            assert_eq!(lines.len(), 5, "{}", style);
            assert_eq!(lines[1], ROW_SEPARATOR);
            assert_eq!(lines[3], ROW_SEPARATOR);
            assert!(lines.iter().step_by(2).all(|row| row.matches('|').count() == 2));
        }
    }

    #[test]
    fn test_renderer_for_style() {
        let board = sample_board();
        let simple = DisplayStyle::Simple.renderer().render(&board);
        assert_eq!(simple, SimpleRenderer.render(&board));
        let numbered = strip_ansi(&DisplayStyle::Numbered.renderer().render(&board));
        assert!(numbered.starts_with("X|2|3"));
    }
}

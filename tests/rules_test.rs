//! Tests for win and tie evaluation through the public API.

use tictactoe::{Board, GameResult, Mark};
use strum::IntoEnumIterator;
use tictactoe_core::rules::{has_tie, has_winner, winner, LINES};

fn fill(pattern: &str) -> Board {
    let mut board = Board::new();
    for (index, ch) in pattern.chars().enumerate() {
        match ch {
            'X' => board.place(index, Mark::X).unwrap(),
            'O' => board.place(index, Mark::O).unwrap(),
            _ => {}
        }
    }
    board
}

#[test]
fn test_each_line_alone_wins_for_its_mark() {
    for mark in Mark::iter() {
        for line in LINES {
            let mut board = Board::new();
            for index in line {
                board.place(index, mark).unwrap();
            }
            assert!(has_winner(&board), "line {:?}", line);
            assert_eq!(winner(&board), Some(mark), "line {:?}", line);
            assert_eq!(GameResult::of(&board), GameResult::Win(mark));
        }
    }
}

#[test]
fn test_lines_cover_rows_columns_and_diagonals() {
    assert_eq!(LINES.len(), 8);
    assert_eq!(LINES[6], [0, 4, 8]);
    assert_eq!(LINES[7], [2, 4, 8]);
}

#[test]
fn test_bottom_left_diagonal_alone_keeps_playing() {
    let board = fill("..X.X.X..");
    assert!(!has_winner(&board));
    assert_eq!(GameResult::of(&board), GameResult::InProgress);
}

#[test]
fn test_right_diagonal_triple_wins_without_corner() {
    let board = fill("O.X.X...X");
    assert_eq!(winner(&board), Some(Mark::X));
    assert_eq!(GameResult::of(&board), GameResult::Win(Mark::X));
}

#[test]
fn test_full_board_without_line_is_tie() {
    let board = fill("XOXXOOOXX");
    assert!(has_tie(&board));
    assert!(!has_winner(&board));
    assert_eq!(GameResult::of(&board), GameResult::Tie);
}

#[test]
fn test_win_takes_precedence_over_full_board() {
    // Full board where X owns the main diagonal.
    let board = fill("XOOOXXOXX");
    assert!(has_tie(&board));
    assert!(has_winner(&board));
    assert_eq!(GameResult::of(&board), GameResult::Win(Mark::X));
}

#[test]
fn test_partial_board_in_progress() {
    let board = fill("XO..X..O.");
    assert!(!has_tie(&board));
    assert!(!has_winner(&board));
    assert_eq!(GameResult::of(&board), GameResult::InProgress);
}

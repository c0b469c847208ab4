//! Board tests - grid model and row clearing

use blockfall::core::Board;
use blockfall::types::{BlockColor, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: usize, color: BlockColor) {
    for col in 0..BOARD_WIDTH as usize {
        board.set_cell(row, col, Some(color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i8), None);
    assert_eq!(board.get(19, 9), Some(None));
}

#[test]
fn test_clear_on_empty_board_is_noop() {
    let mut board = Board::new();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_non_contiguous_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 5, BlockColor::Red);
    fill_row(&mut board, 7, BlockColor::Red);
    board.set_cell(6, 2, Some(BlockColor::Green));
    board.set_cell(4, 8, Some(BlockColor::Blue));

    assert_eq!(board.clear_full_rows(), 2);

    // Rows above each cleared row shift down by the number cleared below them.
    assert_eq!(board.cell(7, 2), Some(BlockColor::Green));
    assert_eq!(board.cell(6, 8), Some(BlockColor::Blue));
    assert!(board.is_row_empty(0));
    assert!(board.is_row_empty(1));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_clear_keeps_partial_rows_in_order() {
    let mut board = Board::from_rows(
        &[
            "#.........",
            "##########",
            ".#........",
            "##########",
            "..#.......",
        ],
        BlockColor::Orange,
    );

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.cell(19, 2), Some(BlockColor::Orange));
    assert_eq!(board.cell(18, 1), Some(BlockColor::Orange));
    assert_eq!(board.cell(17, 0), Some(BlockColor::Orange));
    assert!(board.is_row_empty(16));
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for row in 0..BOARD_HEIGHT as usize {
        fill_row(&mut board, row, BlockColor::Cyan);
    }
    assert_eq!(board.clear_full_rows(), BOARD_HEIGHT as usize);
    assert_eq!(board, Board::new());
}

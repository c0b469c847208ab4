//! Collision and placement rules
//!
//! A placement is rejected when any occupied cell of the shape leaves the board
//! horizontally, reaches past the bottom row, or lands on a filled cell. Rows above
//! the board (negative rows) are never checked: a piece may hang over the top edge.
//! Game-over detection at spawn depends on this asymmetry.

use crate::board::Board;
use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` anchored at column `x`, row `y` fits on the board.
pub fn is_valid_position(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.occupied().all(|(dr, dc)| {
        let row = y as i16 + dr as i16;
        let col = x as i16 + dc as i16;
        if col < 0 || col >= BOARD_WIDTH as i16 || row >= BOARD_HEIGHT as i16 {
            return false;
        }
        // Above the board counts as free.
        row < 0 || !board.is_occupied(row as i8, col as i8)
    })
}

/// Whether `piece` fits where it currently is.
pub fn fits(board: &Board, piece: &Piece) -> bool {
    is_valid_position(board, &piece.shape, piece.x, piece.y)
}

/// Write the piece's color into the board under every occupied cell.
///
/// The caller must have validated the position. A cell outside the board is a
/// contract violation and panics.
pub fn merge(board: &mut Board, piece: &Piece) {
    debug_assert!(fits(board, piece), "merging an unvalidated piece");
    for (row, col) in piece.cells() {
        assert!(row >= 0 && col >= 0, "merge outside board at ({}, {})", row, col);
        board.set_cell(row as usize, col as usize, Some(piece.color));
    }
}

//! Board module - the grid model
//!
//! The board is a 20x10 grid where each cell is either empty or holds the color of
//! a merged piece. Uses a flat array for better cache locality and zero-allocation.
//! Coordinates are `(row, col)`: rows run 0..19 top to bottom, columns 0..9 left to right.
//!
//! The dimensions never change. Cells are only filled by merging a piece and only
//! removed by clearing full rows.

use crate::types::{BlockColor, Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index for a signed position, `None` outside the grid
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    /// Flat index for a position the caller already validated.
    ///
    /// Out-of-bounds access is a contract violation and panics.
    #[inline(always)]
    fn checked_index(row: usize, col: usize) -> usize {
        assert!(
            row < HEIGHT && col < WIDTH,
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            HEIGHT,
            WIDTH
        );
        row * WIDTH + col
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at `(row, col)`. Panics when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::checked_index(row, col)]
    }

    /// Overwrite the cell at `(row, col)`. Panics when out of bounds.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[Self::checked_index(row, col)] = cell;
    }

    /// Checked lookup for signed coordinates.
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let start = row * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Check if a row has no filled cell
    pub fn is_row_empty(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let start = row * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_none())
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows above a removed row shift down by the number of removed rows below them,
    /// and the same number of empty rows appear at the top. The surviving rows keep
    /// their relative order, so non-contiguous clears in one call are handled.
    /// Two-pointer compaction from the bottom, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_row = HEIGHT;

        for read_row in (0..HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                // copy_within handles the overlap
                let src = read_row * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_row * WIDTH);
            }
        }

        self.cells[..write_row * WIDTH].fill(None);
        cleared
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows of text, bottom-aligned.
    ///
    /// `#` (or any non-space, non-`.` char) is a filled cell. Useful for tests.
    pub fn from_rows(rows: &[&str], color: BlockColor) -> Self {
        assert!(rows.len() <= HEIGHT, "too many rows");
        let mut board = Self::new();
        let offset = HEIGHT - rows.len();
        for (i, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate().take(WIDTH) {
                if ch != '.' && ch != ' ' {
                    board.set_cell(offset + i, col, Some(color));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

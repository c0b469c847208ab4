//! Shape module - tetromino matrices and rotation
//!
//! A shape is a small boolean matrix (at most 4x4) with explicit row and column
//! counts. Rotation is a pure transform: reverse the row order, then transpose,
//! which turns the matrix 90° clockwise (rows index downward, columns rightward).

use crate::types::PieceKind;

/// Largest side length of any shape
pub const MAX_SHAPE_SIDE: usize = 4;

/// Boolean occupancy matrix of a piece
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
    rows: u8,
    cols: u8,
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// All rows must have the same length; dimensions must be 1..=4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(
            (1..=MAX_SHAPE_SIDE).contains(&rows.len()),
            "shape needs 1..=4 rows"
        );
        let cols = rows[0].len();
        assert!(
            (1..=MAX_SHAPE_SIDE).contains(&cols),
            "shape needs 1..=4 columns"
        );

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape row {}", r);
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            cells,
            rows: rows.len() as u8,
            cols: cols as u8,
        }
    }

    /// The canonical spawn orientation for a kind
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
            PieceKind::L => Self::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
            PieceKind::J => Self::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Occupancy at `(row, col)`; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Offsets `(row, col)` of occupied cells, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.occupied().count()
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shape[")?;
        for r in 0..self.rows as usize {
            if r > 0 {
                write!(f, "/")?;
            }
            for c in 0..self.cols as usize {
                write!(f, "{}", if self.is_filled(r, c) { '#' } else { '.' })?;
            }
        }
        write!(f, "]")
    }
}

/// Rotate a shape 90° clockwise.
///
/// The result has the input's column count as rows and vice versa. The caller is
/// responsible for validating the rotated placement before committing it.
pub fn rotate(shape: &Shape) -> Shape {
    let rows = shape.rows as usize;
    let cols = shape.cols as usize;
    let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];

    // new[r][c] = old[rows - 1 - c][r]
    for (r, out_row) in cells.iter_mut().enumerate().take(cols) {
        for (c, out) in out_row.iter_mut().enumerate().take(rows) {
            *out = shape.cells[rows - 1 - c][r];
        }
    }

    Shape {
        cells,
        rows: shape.cols,
        cols: shape.rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::canonical(kind).count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let rotated = rotate(&Shape::canonical(PieceKind::I));
        assert_eq!(rotated.rows(), 4);
        assert_eq!(rotated.cols(), 1);
        assert_eq!(rotated.count(), 4);
    }

    #[test]
    fn test_rotate_is_clockwise() {
        // ###      ##
        // #..  ->  .#
        //          .#
        let l = Shape::canonical(PieceKind::L);
        let rotated = rotate(&l);
        assert_eq!(rotated, Shape::from_rows(&[&[1, 1], &[0, 1], &[0, 1]]));
    }

    #[test]
    fn test_rotate_t_points_left() {
        // ###      .#
        // .#.  ->  ##
        //          .#
        let rotated = rotate(&Shape::canonical(PieceKind::T));
        assert_eq!(rotated, Shape::from_rows(&[&[0, 1], &[1, 1], &[0, 1]]));
    }

    #[test]
    fn test_occupied_offsets() {
        let s = Shape::canonical(PieceKind::S);
        let cells: Vec<_> = s.occupied().collect();
        assert_eq!(cells, vec![(0, 1), (0, 2), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(
            format!("{:?}", Shape::canonical(PieceKind::Z)),
            "Shape[##./.##]"
        );
    }

    #[test]
    #[should_panic]
    fn test_ragged_rows_rejected() {
        let _ = Shape::from_rows(&[&[1, 1], &[1]]);
    }
}

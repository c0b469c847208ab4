//! Piece module - the active falling tetromino
//!
//! A piece carries its shape, color, top-left anchor in board coordinates and its
//! own fall timing: time accumulated since the last forced descent and the
//! interval it was spawned with.

use std::time::Duration;

use crate::rng::SimpleRng;
use crate::shape::{rotate, Shape};
use crate::types::{BlockColor, PieceKind, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub shape: Shape,
    pub color: BlockColor,
    /// Anchor column of the shape's top-left corner
    pub x: i8,
    /// Anchor row of the shape's top-left corner
    pub y: i8,
    /// Time accumulated toward the next descent
    pub fall_time: Duration,
    /// Time per row this piece was spawned with
    pub fall_interval: Duration,
}

impl Piece {
    /// Spawn a random piece at the top center.
    ///
    /// Shape and color are drawn independently and uniformly.
    pub fn spawn(rng: &mut SimpleRng, fall_interval: Duration) -> Self {
        let kind = rng.choose(&PieceKind::ALL);
        let color = rng.choose(&BlockColor::ALL);
        Self::with_shape(Shape::canonical(kind), color, fall_interval)
    }

    /// Place a given shape at the spawn position.
    pub fn with_shape(shape: Shape, color: BlockColor, fall_interval: Duration) -> Self {
        Self {
            shape,
            color,
            x: spawn_x(&shape),
            y: 0,
            fall_time: Duration::ZERO,
            fall_interval,
        }
    }

    /// The same piece shifted by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The same piece rotated 90° clockwise around its anchor
    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate(&self.shape),
            ..*self
        }
    }

    /// Board coordinates `(row, col)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dr, dc)| (self.y + dr, self.x + dc))
    }
}

/// Anchor column that centers `shape` horizontally (integer division on both halves)
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BASE_FALL_INTERVAL;

    #[test]
    fn test_spawn_centers_each_shape() {
        assert_eq!(spawn_x(&Shape::canonical(PieceKind::I)), 3);
        assert_eq!(spawn_x(&Shape::canonical(PieceKind::O)), 4);
        assert_eq!(spawn_x(&Shape::canonical(PieceKind::T)), 4);
    }

    #[test]
    fn test_spawn_resets_timing() {
        let mut rng = SimpleRng::new(3);
        let piece = Piece::spawn(&mut rng, BASE_FALL_INTERVAL);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.fall_time, Duration::ZERO);
        assert_eq!(piece.fall_interval, BASE_FALL_INTERVAL);
        assert_eq!(piece.x, spawn_x(&piece.shape));
    }

    #[test]
    fn test_cells_are_translated() {
        let piece = Piece::with_shape(
            Shape::canonical(PieceKind::O),
            BlockColor::Yellow,
            BASE_FALL_INTERVAL,
        )
        .shifted(0, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(5, 4), (5, 5), (6, 4), (6, 5)]);
    }

    #[test]
    fn test_rotated_keeps_anchor() {
        let piece = Piece::with_shape(
            Shape::canonical(PieceKind::I),
            BlockColor::Cyan,
            BASE_FALL_INTERVAL,
        );
        let r = piece.rotated();
        assert_eq!((r.x, r.y), (piece.x, piece.y));
        assert_eq!(r.shape.rows(), 4);
    }
}

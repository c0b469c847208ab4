use std::time::Duration;

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{BlockColor, Cell, BASE_FALL_INTERVAL, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub color: BlockColor,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board coordinates `(row, col)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dr, dc)| (self.y + dr, self.x + dc))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub rows_cleared: u32,
    pub base_fall_interval: Duration,
    pub soft_drop: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            rows_cleared: 0,
            base_fall_interval: BASE_FALL_INTERVAL,
            soft_drop: false,
            game_over: false,
        }
    }
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: horizontally centered, row 0
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Target loop iteration (~60 per second) |
//! | `BASE_FALL_INTERVAL` | 500ms | Starting fall interval per cell |
//! | `SOFT_DROP_INTERVAL` | 50ms | Fall interval while soft drop is held |
//! | `FALL_INTERVAL_FLOOR` | 100ms | Fastest base interval reachable |
//!
//! # Difficulty
//!
//! Every time `score / SPEEDUP_SCORE_STEP` reaches a new band, the base fall interval
//! is multiplied by `SPEEDUP_NUMERATOR / SPEEDUP_DENOMINATOR` (0.9), clamped to the floor.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{BlockColor, Intent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), BlockColor::ALL.len());
//! assert_eq!(BlockColor::Orange.as_str(), "orange");
//! assert!(Intent::Rotate.is_gameplay());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::time::Duration;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Target loop iteration in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Fall interval a new session starts with (0.5s per row).
pub const BASE_FALL_INTERVAL: Duration = Duration::from_millis(500);

/// Fall interval used while a soft drop is held (0.05s per row).
pub const SOFT_DROP_INTERVAL: Duration = Duration::from_millis(50);

/// The base fall interval never drops below this (0.1s per row).
pub const FALL_INTERVAL_FLOOR: Duration = Duration::from_millis(100);

/// Speed-up multiplier numerator (9/10 = 0.9x interval)
pub const SPEEDUP_NUMERATOR: u64 = 9;

/// Speed-up multiplier denominator
pub const SPEEDUP_DENOMINATOR: u64 = 10;

/// Score band width for the difficulty ramp.
pub const SPEEDUP_SCORE_STEP: u32 = 1000;

/// Points awarded per cleared row.
pub const POINTS_PER_ROW: u32 = 100;

/// Longest player name accepted on the name entry screen.
pub const MAX_NAME_LEN: usize = 16;

/// The seven canonical tetromino shapes
///
/// The order matches the shape table used by the spawn rule:
/// - **I**: 1x4 bar
/// - **O**: 2x2 square
/// - **T**: 2x3, stem pointing down
/// - **L**: 2x3, foot on the left
/// - **J**: 2x3, foot on the right
/// - **Z**: 2x3, upper pair on the left
/// - **S**: 2x3, upper pair on the right
///
/// Colors are chosen independently of the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    /// All kinds in spawn-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];
}

/// Block colors - the fixed seven-color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Cyan,
    Yellow,
    Magenta,
    Red,
    Green,
    Blue,
    Orange,
}

impl BlockColor {
    /// All palette entries in spawn-table order.
    pub const ALL: [BlockColor; 7] = [
        BlockColor::Cyan,
        BlockColor::Yellow,
        BlockColor::Magenta,
        BlockColor::Red,
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Orange,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Cyan => "cyan",
            BlockColor::Yellow => "yellow",
            BlockColor::Magenta => "magenta",
            BlockColor::Red => "red",
            BlockColor::Green => "green",
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(BlockColor)`: Cell filled by a merged piece of that color
pub type Cell = Option<BlockColor>;

/// Discrete intents produced by the presentation layer.
///
/// Gameplay intents only have an effect while a game is being played; the
/// screen-flow intents drive the start, name entry and game over screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Fast descent starts (key pressed)
    SoftDropStart,
    /// Fast descent ends (key released)
    SoftDropStop,
    /// "Press any key" on the start and game over screens
    Acknowledge,
    /// A printable character typed on the name entry screen
    TypeChar(char),
    /// Delete the last typed character
    Backspace,
    /// Confirm the typed name
    Submit,
    /// Leave the program
    Quit,
}

impl Intent {
    /// True for intents that act on the falling piece.
    pub fn is_gameplay(&self) -> bool {
        matches!(
            self,
            Intent::MoveLeft
                | Intent::MoveRight
                | Intent::Rotate
                | Intent::SoftDropStart
                | Intent::SoftDropStop
        )
    }
}

/// Screen-flow phases of a session
///
/// `AwaitingStart → Playing → (NameEntry →) GameOver → AwaitingStart`, with
/// `Exited` reachable from every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingStart,
    Playing,
    /// A new best score was reached; the player is typing a name.
    NameEntry,
    GameOver,
    Exited,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingStart => "awaitingStart",
            Phase::Playing => "playing",
            Phase::NameEntry => "nameEntry",
            Phase::GameOver => "gameOver",
            Phase::Exited => "exited",
        }
    }
}

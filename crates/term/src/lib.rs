//! Terminal presentation for the game.
//!
//! Screens are drawn into a plain character framebuffer, which a renderer then
//! flushes to the terminal as a diff against the previous frame. Board cells are
//! two columns wide to make up for the aspect ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_rgb, BoardRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

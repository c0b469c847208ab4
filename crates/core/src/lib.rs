//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the simulation: grid, pieces, placement rules, scoring,
//! the per-iteration game loop and the screen flow around it. It has no
//! dependencies on terminals or the filesystem, which keeps it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Whole sessions can be replayed from scripted intents
//! - **Portable**: Any presenter can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid with row clearing
//! - [`shape`]: tetromino matrices and clockwise rotation
//! - [`piece`]: the active piece and the spawn rule
//! - [`collision`]: placement validity and merging into the board
//! - [`scoring`]: row-clear points and the difficulty ramp
//! - [`game_state`]: one game, driven by intents and elapsed time
//! - [`session`]: start screen, name entry and game over around games
//! - [`highscore`]: best record and the store contract
//! - [`intents`]: intent sources (terminal input, scripted replays)
//! - [`rng`]: seeded LCG for the spawn rule
//! - [`snapshot`]: copyable render snapshots
//!
//! # Game Rules
//!
//! - A random shape (one of 7) in a random color (one of 7) spawns top-center.
//! - Left/right moves and clockwise rotation apply only when the result fits.
//! - The piece descends one row each time its fall interval elapses (50ms while
//!   soft drop is held). When it cannot descend it locks: full rows clear for
//!   100 points each and the next piece spawns.
//! - Each new 1000-point band makes pieces fall 10% faster, down to 100ms per row.
//! - The game ends when a new piece does not fit at its spawn position.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use blockfall_core::GameState;
//! use blockfall_types::Intent;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_intent(Intent::MoveRight);
//! game.apply_intent(Intent::Rotate);
//!
//! // Half a second of wall-clock time moves the piece down one row.
//! let y = game.active().unwrap().y;
//! game.tick(Duration::from_millis(500));
//! assert_eq!(game.active().unwrap().y, y + 1);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod highscore;
pub mod intents;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{is_valid_position, merge};
pub use game_state::{GameState, LockEvent};
pub use highscore::{HighScore, HighScoreStore, MemoryStore};
pub use intents::{IntentBatch, IntentSource, ScriptedIntents};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use scoring::{line_clear_score, DifficultyRamp};
pub use session::{Flow, Session, SessionView};
pub use shape::{rotate, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

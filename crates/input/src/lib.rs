//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s according to the
//! current screen, and feeds them to a session through
//! [`blockfall_core::IntentSource`]. Terminals that never report key releases
//! are handled by a timeout on the held soft-drop key.

pub mod handler;
pub mod map;
pub mod source;

pub use blockfall_types as types;

pub use handler::{SoftDropLatch, DEFAULT_RELEASE_TIMEOUT};
pub use map::{is_soft_drop_key, map_key, should_quit};
pub use source::TerminalInput;

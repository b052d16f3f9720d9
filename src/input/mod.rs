//! Keyboard input module
//!
//! Turns terminal key events into [`KeyEventSnapshot`](crate::cards::KeyEventSnapshot)s.

pub mod keymap;

// Re-export main functions
pub use keymap::{is_quit, snapshot};

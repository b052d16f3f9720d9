//! KeyCode Challenge - live keyboard event information in the terminal
//!
//! A key press swaps the welcome cover for a set of cards describing the
//! event. The cards hide themselves again after a few idle seconds.

pub mod cards;
pub mod config;
pub mod input;
pub mod render;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use cards::{KeyEventSnapshot, KeyLocation};
pub use config::Config;
pub use render::Renderer;
pub use state::{AppState, TimerState, Visibility};
pub use tasks::CountdownTimer;
pub use utils::signals::shutdown_signal;

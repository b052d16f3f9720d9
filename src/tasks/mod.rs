//! Background tasks module
//!
//! This module contains the auto-hide countdown and the terminal event loop.

pub mod countdown_timer;
pub mod input_listener;

// Re-export main types and functions
pub use countdown_timer::CountdownTimer;
pub use input_listener::input_listener_task;

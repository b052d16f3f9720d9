//! State management module
//!
//! This module contains the timer and visibility state, and the application
//! controller that owns them.

pub mod app_state;
pub mod timer_state;
pub mod visibility;

use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export main types
pub use app_state::AppState;
pub use timer_state::TimerState;
pub use visibility::Visibility;

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

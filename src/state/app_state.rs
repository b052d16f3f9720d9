//! Main application state: the key event controller
//!
//! The controller is idle while the cover is shown and active while the cards
//! are shown. A key event moves it to active and rearms the auto-hide timer;
//! the timer elapsing moves it back to idle.

use std::{
    io,
    sync::{Arc, Mutex},
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, error, info};

use super::{lock, TimerState, Visibility};
use crate::{
    cards::{self, KeyEventSnapshot},
    render::{Renderer, StatusLine},
    tasks::CountdownTimer,
};

type SharedRenderer = Arc<Mutex<Box<dyn Renderer>>>;

/// Application controller owning the visibility state, the auto-hide timer
/// and the renderer
pub struct AppState {
    visibility: Arc<Mutex<Visibility>>,
    renderer: SharedRenderer,
    timer: CountdownTimer,
    last_event_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create the controller in the idle state
    pub fn new(renderer: Box<dyn Renderer>, timer_duration_seconds: u64) -> Self {
        info!("Auto-hide after {}s without a key press", timer_duration_seconds);
        let visibility = Arc::new(Mutex::new(Visibility::default()));
        let renderer: SharedRenderer = Arc::new(Mutex::new(renderer));

        let timer = {
            let visibility = Arc::clone(&visibility);
            let renderer = Arc::clone(&renderer);
            CountdownTimer::new(
                move || hide_cards(&visibility, &renderer),
                timer_duration_seconds,
            )
        };

        Self {
            visibility,
            renderer,
            timer,
            last_event_time: Mutex::new(None),
        }
    }

    /// Draw the current view
    pub fn show_current_view(&self) {
        let visibility = lock(&self.visibility);
        report(lock(&self.renderer).show(*visibility), "show view");
    }

    /// Feed one keyboard event through the controller
    pub fn handle_key_event(&self, snapshot: &KeyEventSnapshot) {
        let mut visibility = lock(&self.visibility);
        let mut renderer = lock(&self.renderer);

        if visibility.is_cover_shown() {
            info!("Key event while idle, showing cards");
            visibility.toggle();
            report(renderer.show(*visibility), "show cards");
            report(renderer.render(&cards::empty_fragments()), "render cards");
            self.timer.start();
        }

        debug!("Updating cards for key {:?} ({})", snapshot.key, snapshot.code);
        report(renderer.update(&cards::fragments(snapshot)), "update cards");
        *lock(&self.last_event_time) = Some(Utc::now());

        self.timer.reset();
    }

    /// Show the card layout without listening for keys, for inspecting the
    /// layout. The auto-hide timer is never started.
    pub fn run_debug(&self) {
        let mut visibility = lock(&self.visibility);
        info!("Debug mode: showing empty cards");

        if visibility.is_cover_shown() {
            visibility.toggle();
        }
        let mut renderer = lock(&self.renderer);
        report(renderer.show(*visibility), "show cards");
        report(renderer.render(&cards::empty_fragments()), "render cards");
    }

    /// Redraw the status line from a timer state
    pub fn refresh_status(&self, timer: &TimerState) {
        let status = StatusLine {
            remaining_seconds: timer.remaining_seconds(),
            last_event_at: self.get_last_event_time(),
        };
        report(lock(&self.renderer).status(&status), "draw status");
    }

    /// Tell the renderer the screen size changed
    pub fn resize(&self, cols: u16, rows: u16) {
        debug!("Screen resized to {}x{}", cols, rows);
        report(lock(&self.renderer).resize(cols, rows), "resize");
    }

    /// Get the current visibility
    pub fn visibility(&self) -> Visibility {
        *lock(&self.visibility)
    }

    /// Get the current timer state
    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    /// Watch timer state changes
    pub fn timer_updates(&self) -> watch::Receiver<TimerState> {
        self.timer.subscribe()
    }

    /// Time of the last key event shown
    pub fn get_last_event_time(&self) -> Option<DateTime<Utc>> {
        *lock(&self.last_event_time)
    }
}

/// Elapse handler: go back to the cover and empty the cards
fn hide_cards(visibility: &Mutex<Visibility>, renderer: &Mutex<Box<dyn Renderer>>) {
    let mut visibility = lock(visibility);
    if visibility.is_cover_shown() {
        debug!("Cards already hidden, nothing to do");
        return;
    }

    info!("Auto-hide timer elapsed, showing cover");
    visibility.toggle();
    let mut renderer = lock(renderer);
    report(renderer.show(*visibility), "show cover");
    report(renderer.clear(), "clear cards");
}

fn report(result: io::Result<()>, action: &str) {
    if let Err(e) = result {
        error!("Failed to {}: {}", action, e);
    }
}

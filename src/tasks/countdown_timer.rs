//! Auto-hide countdown timer task

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{sync::watch, time::sleep};
use tracing::{debug, info, warn};

use crate::state::{lock, timer_state::Tick, TimerState};

/// Callback run once each time the countdown reaches zero
pub type ElapseCallback = Arc<dyn Fn() + Send + Sync>;

/// A resettable single-shot timer that calls back when its TTL reaches zero.
///
/// Ticks run on a spawned tokio task, so `start` must be called from within a
/// tokio runtime. The timer does not restart itself after elapsing.
pub struct CountdownTimer {
    state: Arc<Mutex<TimerState>>,
    callback: ElapseCallback,
    updates_tx: watch::Sender<TimerState>,
}

impl CountdownTimer {
    /// Create a stopped timer with `ttl_seconds` to live
    pub fn new<F>(callback: F, ttl_seconds: u64) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let state = TimerState::new(ttl_seconds);
        let (updates_tx, _) = watch::channel(state.clone());

        Self {
            state: Arc::new(Mutex::new(state)),
            callback: Arc::new(callback),
            updates_tx,
        }
    }

    /// Start counting down. Starting a running timer does nothing.
    pub fn start(&self) {
        let generation = {
            let mut state = lock(&self.state);
            let generation = state.start();
            self.publish(&state);
            generation
        };

        let Some(generation) = generation else {
            debug!("Countdown already running");
            return;
        };

        info!("Starting countdown, generation {}", generation);
        tokio::spawn(tick_loop(
            Arc::clone(&self.state),
            Arc::clone(&self.callback),
            self.updates_tx.clone(),
            generation,
        ));
    }

    /// Stop counting down without touching the remaining TTL
    pub fn stop(&self) {
        let mut state = lock(&self.state);
        state.stop();
        self.publish(&state);
    }

    /// Rearm the countdown to its full TTL
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        state.reset();
        self.publish(&state);
    }

    /// Current timer state
    pub fn state(&self) -> TimerState {
        lock(&self.state).clone()
    }

    /// Watch every change of the timer state
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.updates_tx.subscribe()
    }

    fn publish(&self, state: &TimerState) {
        self.updates_tx.send_replace(state.clone());
    }
}

/// One-second tick loop owned by a single start of the timer
async fn tick_loop(
    state: Arc<Mutex<TimerState>>,
    callback: ElapseCallback,
    updates_tx: watch::Sender<TimerState>,
    generation: u64,
) {
    loop {
        sleep(Duration::from_secs(1)).await;

        let tick = {
            let mut state = lock(&state);
            let tick = state.tick(generation);
            if tick != Tick::Stale {
                updates_tx.send_replace(state.clone());
            }
            tick
        };

        match tick {
            Tick::Stale => {
                debug!("Tick loop {} is no longer current, exiting", generation);
                return;
            }
            Tick::Remaining(seconds) => {
                debug!("Countdown: {}s remaining", seconds);
            }
            Tick::Elapsed => {
                info!("Countdown elapsed");
                callback();

                let mut state = lock(&state);
                state.reset();
                updates_tx.send_replace(state.clone());
                if state.is_running() {
                    warn!("Timer restarted while its elapse callback ran");
                }
                return;
            }
        }
    }
}

//! Timer state structure and management

/// Outcome of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timer is stopped, or the tick belongs to an older tick loop
    Stale,
    /// The countdown moved on and this many seconds remain
    Remaining(u64),
    /// The countdown reached zero and the timer stopped itself
    Elapsed,
}

/// Countdown state for the auto-hide timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    initial_ttl: u64,
    current_ttl: u64,
    running: bool,
    /// Bumped on every stopped -> running transition
    generation: u64,
}

impl TimerState {
    /// Create a stopped timer state with a full TTL
    pub fn new(ttl_seconds: u64) -> Self {
        let ttl = ttl_seconds.max(1);
        Self {
            initial_ttl: ttl,
            current_ttl: ttl,
            running: false,
            generation: 0,
        }
    }

    /// Mark the timer as running.
    ///
    /// Returns the generation of a new tick loop when the timer was stopped,
    /// and `None` when a loop is already counting down.
    pub fn start(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.running = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Stop counting down. Leaves the remaining TTL alone.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restore the full TTL without touching the running flag
    pub fn reset(&mut self) {
        self.current_ttl = self.initial_ttl;
    }

    /// Advance the countdown by one second on behalf of tick loop `generation`
    pub fn tick(&mut self, generation: u64) -> Tick {
        if !self.running || generation != self.generation {
            return Tick::Stale;
        }

        self.current_ttl = self.current_ttl.saturating_sub(1);
        if self.current_ttl == 0 {
            self.running = false;
            Tick::Elapsed
        } else {
            Tick::Remaining(self.current_ttl)
        }
    }

    pub fn initial_ttl(&self) -> u64 {
        self.initial_ttl
    }

    pub fn current_ttl(&self) -> u64 {
        self.current_ttl
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining seconds while the timer is counting down
    pub fn remaining_seconds(&self) -> Option<u64> {
        if self.running {
            Some(self.current_ttl)
        } else {
            None
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(5)
    }
}

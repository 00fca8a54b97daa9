//! Elapsed-time tracker: start/stop/reset accounting with resume-from-base

use std::time::Duration;
use tracing::debug;

use super::{Clock, MonotonicClock, TimerState};

/// Stopwatch engine polled once per display refresh.
///
/// Holds no locks; hosts that drive it from more than one task wrap it in
/// [`SharedTracker`](super::SharedTracker).
#[derive(Debug)]
pub struct ElapsedTimeTracker<C = MonotonicClock> {
    clock: C,
    state: TimerState,
}

impl ElapsedTimeTracker<MonotonicClock> {
    /// Create a stopped tracker on the monotonic clock
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for ElapsedTimeTracker<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ElapsedTimeTracker<C> {
    /// Create a stopped tracker reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: TimerState::new(),
        }
    }

    /// Open a new segment. Accumulated time is kept, so this resumes.
    pub fn start(&mut self) {
        if self.state.running {
            return;
        }
        self.state.segment_start = Some(self.clock.now());
        self.state.running = true;
        debug!("Tracker started from base {:?}", self.state.base_accumulated);
    }

    /// Close the open segment and fold it into the base
    pub fn stop(&mut self) {
        if !self.state.running {
            return;
        }
        let now = self.clock.now();
        self.state.base_accumulated = self.state.elapsed_at(now);
        self.state.segment_start = None;
        self.state.running = false;
        debug!("Tracker stopped at {:?}", self.state.base_accumulated);
    }

    /// Return to the zero state regardless of the current one
    pub fn reset(&mut self) {
        self.state = TimerState::new();
        debug!("Tracker reset");
    }

    /// Stop if running, start otherwise. Returns the new running flag.
    pub fn toggle(&mut self) -> bool {
        if self.state.running {
            self.stop();
        } else {
            self.start();
        }
        self.state.running
    }

    /// Replace the accumulated base while stopped.
    ///
    /// Returns false and leaves the state untouched while running.
    pub fn seed(&mut self, base: Duration) -> bool {
        if self.state.running {
            return false;
        }
        self.state.base_accumulated = base;
        true
    }

    /// Current elapsed time. Never mutates.
    pub fn sample(&self) -> Duration {
        self.state.elapsed_at(self.clock.now())
    }

    /// Check if the tracker is running
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Get the raw timer state
    pub fn state(&self) -> &TimerState {
        &self.state
    }
}

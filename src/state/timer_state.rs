//! Timer state structure and management

use std::time::Duration;
use tokio::time::Instant;

/// Raw stopwatch bookkeeping: accumulated base plus the open segment, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub running: bool,
    pub base_accumulated: Duration,
    pub segment_start: Option<Instant>,
}

impl TimerState {
    /// Create a zeroed, stopped timer state
    pub fn new() -> Self {
        Self {
            running: false,
            base_accumulated: Duration::ZERO,
            segment_start: None,
        }
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed time at `now`: the base, plus the open segment while running.
    /// Saturates at `Duration::MAX`.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match self.segment_start {
            Some(started) if self.running => {
                self.base_accumulated.saturating_add(now.saturating_duration_since(started))
            }
            _ => self.base_accumulated,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

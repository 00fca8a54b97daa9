//! Clock sources for the elapsed-time tracker

use tokio::time::Instant;

/// A source of monotonic instants comparable by subtraction
pub trait Clock {
    /// Read the current instant
    fn now(&self) -> Instant;
}

/// Clock backed by the tokio monotonic clock.
///
/// Under a paused tokio runtime this follows `tokio::time::advance`, which is
/// what the tests rely on.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

//! State management module
//!
//! This module contains the stopwatch engine, its clock, and the shared wrapper
//! the host drives it through.

pub mod clock;
pub mod shared_tracker;
pub mod timer_state;
pub mod tracker;

// Re-export main types
pub use clock::{Clock, MonotonicClock};
pub use shared_tracker::SharedTracker;
pub use timer_state::TimerState;
pub use tracker::ElapsedTimeTracker;

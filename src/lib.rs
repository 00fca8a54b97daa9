//! Lap Clock - an elapsed-time tracking engine with a terminal stopwatch host
//!
//! The core is [`ElapsedTimeTracker`], a small start/stop/reset state machine
//! polled for the current elapsed time. The remaining modules wrap it for a
//! host that reads commands and redraws the time on a refresh tick.

pub mod config;
pub mod control;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use control::{Command, StatusSnapshot};
pub use state::{Clock, ElapsedTimeTracker, MonotonicClock, SharedTracker, TimerState};
pub use utils::{format_elapsed, parse_elapsed, shutdown_signal};

//! Background tasks module
//!
//! This module contains the tasks the host runs around the shared tracker.

pub mod command_input;
pub mod display_refresh;

// Re-export main functions
pub use command_input::{command_input_task, spawn_stdin_reader};
pub use display_refresh::{display_refresh_task, DisplayAdapter, DisplayMode};

//! Control surface module
//!
//! This module contains the commands the host accepts, their handlers, and the
//! snapshot structure shown to the user.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::Command;
pub use handlers::{handle_command, handle_line, CommandOutcome};
pub use responses::StatusSnapshot;

//! Command input background task

use std::{
    io::{self, BufRead},
    sync::Arc,
    thread,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    control::{handle_line, CommandOutcome},
    state::SharedTracker,
};

/// Read stdin lines on a dedicated thread and forward them.
///
/// A plain thread keeps a blocked read from holding up runtime shutdown.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);

    let spawned = thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
            debug!("Input reader finished");
        });

    if let Err(e) = spawned {
        warn!("Failed to spawn input reader: {}", e);
    }

    rx
}

/// Background task that applies input lines to the tracker until quit or end of input
pub async fn command_input_task(state: Arc<SharedTracker>, mut lines: mpsc::Receiver<String>) {
    info!("Accepting commands: start, stop, toggle (Enter), reset, seed MM:SS.CC, status, quit");

    while let Some(line) = lines.recv().await {
        match handle_line(&state, &line) {
            CommandOutcome::Applied(snapshot) => {
                debug!("Now {} (running={})", snapshot.display, snapshot.running);
            }
            CommandOutcome::Rejected(_) => {}
            CommandOutcome::Quit => {
                info!("Quit requested");
                return;
            }
        }
    }

    info!("Input closed");
}

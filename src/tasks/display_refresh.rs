//! Display refresh background task

use std::{sync::Arc, time::Duration};
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::broadcast::error::RecvError,
    time::MissedTickBehavior,
};
use tracing::{debug, error, info, warn};

use crate::{control::StatusSnapshot, state::SharedTracker};

/// How frames are written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// One line rewritten in place with a carriage return
    Text,
    /// One JSON snapshot per line
    Json,
}

/// Writes snapshots to an output, skipping frames that would look identical
pub struct DisplayAdapter<W> {
    out: W,
    mode: DisplayMode,
    last_frame: Option<(String, bool)>,
}

impl<W: AsyncWrite + Unpin> DisplayAdapter<W> {
    /// Create an adapter writing to `out`
    pub fn new(out: W, mode: DisplayMode) -> Self {
        Self {
            out,
            mode,
            last_frame: None,
        }
    }

    /// Write a snapshot unless it matches the previous frame
    pub async fn render(&mut self, snapshot: &StatusSnapshot) -> Result<(), String> {
        let frame = (snapshot.display.clone(), snapshot.running);
        if self.last_frame.as_ref() == Some(&frame) {
            return Ok(());
        }

        let bytes = match self.mode {
            DisplayMode::Text => {
                let marker = if snapshot.running { ">" } else { "||" };
                format!("\r{} {:<2}", snapshot.display, marker)
            }
            DisplayMode::Json => format!("{}\n", snapshot.to_json_line()?),
        };

        self.out.write_all(bytes.as_bytes()).await
            .map_err(|e| format!("Failed to write display frame: {}", e))?;
        self.out.flush().await
            .map_err(|e| format!("Failed to flush display: {}", e))?;

        self.last_frame = Some(frame);
        Ok(())
    }

    /// End the in-place line so later output starts on a fresh one
    pub async fn finish(&mut self) -> Result<(), String> {
        if self.mode == DisplayMode::Text && self.last_frame.is_some() {
            self.out.write_all(b"\n").await
                .map_err(|e| format!("Failed to write display frame: {}", e))?;
            self.out.flush().await
                .map_err(|e| format!("Failed to flush display: {}", e))?;
        }
        Ok(())
    }
}

/// Background task that redraws the stopwatch.
///
/// Samples on every tick while running, and once after each command so stop
/// and reset freeze or clear the display right away.
pub async fn display_refresh_task<W>(
    state: Arc<SharedTracker>,
    refresh: Duration,
    mut display: DisplayAdapter<W>,
) where
    W: AsyncWrite + Unpin,
{
    info!("Starting display refresh task at {:?} per frame", refresh);

    let mut state_rx = state.subscribe();
    let mut interval = tokio::time::interval(refresh);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    match state.snapshot() {
        Ok(snapshot) => {
            if let Err(e) = display.render(&snapshot).await {
                error!("{}", e);
                return;
            }
        }
        Err(e) => warn!("Failed to take initial snapshot: {}", e),
    }

    loop {
        let snapshot = tokio::select! {
            _ = interval.tick() => {
                match state.is_running() {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        warn!("Failed to read running state: {}", e);
                        continue;
                    }
                }
                match state.snapshot() {
                    Ok(snapshot) => snapshot,
                    Err(e) => {
                        warn!("Failed to sample stopwatch: {}", e);
                        continue;
                    }
                }
            }

            received = state_rx.recv() => {
                match received {
                    Ok(snapshot) => {
                        debug!("Display received state change: {:?}", snapshot.last_command);
                        snapshot
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Display skipped {} state changes", skipped);
                        continue;
                    }
                    Err(RecvError::Closed) => {
                        info!("State change channel closed, stopping display");
                        break;
                    }
                }
            }
        };

        if let Err(e) = display.render(&snapshot).await {
            error!("{}", e);
            break;
        }
    }
}

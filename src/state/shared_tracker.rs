//! Shared tracker state for hosts that command and sample from different tasks

use std::{
    sync::{Mutex, MutexGuard},
    time::Duration,
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use super::ElapsedTimeTracker;
use crate::control::StatusSnapshot;

/// Last command name and the wall-clock time it was applied
type LastCommand = (Option<String>, Option<DateTime<Utc>>);

/// Tracker behind a mutex, with last-command tracking and change notifications
#[derive(Debug)]
pub struct SharedTracker {
    tracker: Mutex<ElapsedTimeTracker>,
    last_command: Mutex<LastCommand>,
    /// Fires once per applied command so the display can refresh immediately
    pub state_change_tx: broadcast::Sender<StatusSnapshot>,
    /// Latest snapshot after a command
    pub snapshot_tx: watch::Sender<StatusSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<StatusSnapshot>,
}

impl SharedTracker {
    /// Create a shared tracker around a fresh, stopped tracker
    pub fn new() -> Self {
        Self::with_tracker(ElapsedTimeTracker::new())
    }

    /// Wrap an existing tracker
    pub fn with_tracker(tracker: ElapsedTimeTracker) -> Self {
        let (state_change_tx, _) = broadcast::channel(64);
        let (snapshot_tx, snapshot_rx) = watch::channel(StatusSnapshot::idle());

        Self {
            tracker: Mutex::new(tracker),
            last_command: Mutex::new((None, None)),
            state_change_tx,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    fn lock_tracker(&self) -> Result<MutexGuard<'_, ElapsedTimeTracker>, String> {
        self.tracker.lock()
            .map_err(|e| format!("Failed to lock tracker: {}", e))
    }

    /// Apply a mutation under the lock, record it and notify listeners
    pub fn update<F>(&self, command: &str, updater: F) -> Result<StatusSnapshot, String>
    where
        F: FnOnce(&mut ElapsedTimeTracker),
    {
        let mut tracker = self.lock_tracker()?;
        updater(&mut *tracker);
        let running = tracker.is_running();
        let elapsed = tracker.sample();
        drop(tracker);

        Ok(self.record(command, running, elapsed))
    }

    /// Update last-command tracking and publish the resulting snapshot
    fn record(&self, command: &str, running: bool, elapsed: Duration) -> StatusSnapshot {
        let now = Utc::now();
        if let Ok(mut last) = self.last_command.lock() {
            *last = (Some(command.to_string()), Some(now));
        }

        let snapshot = StatusSnapshot::new(running, elapsed, Some(command.to_string()), Some(now));
        self.publish(snapshot.clone());
        snapshot
    }

    fn publish(&self, snapshot: StatusSnapshot) {
        // No subscribers is normal when running headless
        if self.state_change_tx.receiver_count() > 0 {
            if let Err(e) = self.state_change_tx.send(snapshot.clone()) {
                warn!("Failed to send state change notification: {}", e);
            }
        }
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to send snapshot update: {}", e);
        }
    }

    /// Start the stopwatch
    pub fn start(&self) -> Result<StatusSnapshot, String> {
        info!("Starting stopwatch");
        self.update("start", |tracker| tracker.start())
    }

    /// Stop the stopwatch
    pub fn stop(&self) -> Result<StatusSnapshot, String> {
        info!("Stopping stopwatch");
        self.update("stop", |tracker| tracker.stop())
    }

    /// Toggle between running and stopped
    pub fn toggle(&self) -> Result<StatusSnapshot, String> {
        let snapshot = self.update("toggle", |tracker| {
            tracker.toggle();
        })?;
        info!("Stopwatch toggled, running={}", snapshot.running);
        Ok(snapshot)
    }

    /// Reset the stopwatch to zero
    pub fn reset(&self) -> Result<StatusSnapshot, String> {
        info!("Resetting stopwatch");
        self.update("reset", |tracker| tracker.reset())
    }

    /// Replace the accumulated base. Rejected while running; nothing changes then.
    pub fn seed(&self, base: Duration) -> Result<StatusSnapshot, String> {
        let mut tracker = self.lock_tracker()?;
        if !tracker.seed(base) {
            return Err("Cannot seed the stopwatch while it is running".to_string());
        }
        let elapsed = tracker.sample();
        drop(tracker);

        let snapshot = self.record("seed", false, elapsed);
        info!("Stopwatch seeded with {}", snapshot.display);
        Ok(snapshot)
    }

    /// Current elapsed time
    pub fn sample(&self) -> Result<Duration, String> {
        self.lock_tracker().map(|tracker| tracker.sample())
    }

    /// Check if the stopwatch is running
    pub fn is_running(&self) -> Result<bool, String> {
        self.lock_tracker().map(|tracker| tracker.is_running())
    }

    /// Sample into a snapshot without recording a command
    pub fn snapshot(&self) -> Result<StatusSnapshot, String> {
        let (running, elapsed) = {
            let tracker = self.lock_tracker()?;
            (tracker.is_running(), tracker.sample())
        };
        let (last_command, last_command_time) = self.get_last_command();
        Ok(StatusSnapshot::new(running, elapsed, last_command, last_command_time))
    }

    /// Get last command information
    pub fn get_last_command(&self) -> LastCommand {
        self.last_command.lock()
            .map(|last| last.clone())
            .unwrap_or((None, None))
    }

    /// Subscribe to per-command change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StatusSnapshot> {
        self.state_change_tx.subscribe()
    }
}

impl Default for SharedTracker {
    fn default() -> Self {
        Self::new()
    }
}

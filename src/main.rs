//! Lap Clock - a terminal stopwatch
//!
//! This is the main entry point for the lap-clock application.

use std::sync::Arc;
use anyhow::anyhow;
use tracing::info;

use lap_clock::{
    config::Config,
    state::{ElapsedTimeTracker, SharedTracker},
    tasks::{command_input_task, display_refresh_task, spawn_stdin_reader, DisplayAdapter},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the display line on stdout stays intact
    tracing_subscriber::fmt()
        .with_env_filter(format!("lap_clock={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting lap-clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: refresh={}Hz, mode={:?}, start={}",
          config.refresh_hz, config.display_mode(), config.start);

    let mut tracker = ElapsedTimeTracker::new();
    if let Some(base) = config.initial_base().map_err(|e| anyhow!(e))? {
        if !tracker.seed(base) {
            return Err(anyhow!("Failed to seed stopwatch with {:?}", base));
        }
        info!("Seeded stopwatch with {:?}", base);
    }
    let state = Arc::new(SharedTracker::with_tracker(tracker));

    // Start the display refresh background task
    let display = DisplayAdapter::new(tokio::io::stdout(), config.display_mode());
    let display_task = tokio::spawn(display_refresh_task(
        Arc::clone(&state),
        config.refresh_interval(),
        display,
    ));
    tokio::task::yield_now().await;

    if config.start {
        state.start().map_err(|e| anyhow!(e))?;
    }

    let input_task = tokio::spawn(command_input_task(Arc::clone(&state), spawn_stdin_reader()));

    tokio::select! {
        _ = input_task => {}
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    display_task.abort();

    let final_snapshot = state.snapshot().map_err(|e| anyhow!(e))?;
    let mut display = DisplayAdapter::new(tokio::io::stdout(), config.display_mode());
    display.render(&final_snapshot).await.map_err(|e| anyhow!(e))?;
    display.finish().await.map_err(|e| anyhow!(e))?;

    info!("Stopwatch closed at {}", final_snapshot.display);
    Ok(())
}

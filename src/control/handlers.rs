//! Command handlers

use tracing::{debug, error, info, warn};

use crate::state::SharedTracker;
use super::{Command, StatusSnapshot};

/// What the input loop should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Command applied (or a no-op); the resulting state
    Applied(StatusSnapshot),
    /// Command rejected; state left unchanged
    Rejected(String),
    Quit,
}

/// Apply one command to the shared tracker
pub fn handle_command(state: &SharedTracker, command: Command) -> CommandOutcome {
    debug!("Handling command: {}", command);

    let result = match command {
        Command::Start => state.start(),
        Command::Stop => state.stop(),
        Command::Toggle => state.toggle(),
        Command::Reset => state.reset(),
        Command::Seed(base) => match state.seed(base) {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                warn!("Seed ignored: {}", e);
                return CommandOutcome::Rejected(e);
            }
        },
        Command::Status => state.snapshot().map(|snapshot| {
            info!(
                "Status: {} running={} last_command={:?}",
                snapshot.display, snapshot.running, snapshot.last_command
            );
            snapshot
        }),
        Command::Quit => return CommandOutcome::Quit,
    };

    match result {
        Ok(snapshot) => CommandOutcome::Applied(snapshot),
        Err(e) => {
            error!("Failed to apply {} command: {}", command, e);
            CommandOutcome::Rejected(e)
        }
    }
}

/// Parse and apply one input line
pub fn handle_line(state: &SharedTracker, line: &str) -> CommandOutcome {
    match line.parse::<Command>() {
        Ok(command) => handle_command(state, command),
        Err(e) => {
            warn!("{}", e);
            CommandOutcome::Rejected(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::time::advance;

    fn applied(outcome: CommandOutcome) -> StatusSnapshot {
        match outcome {
            CommandOutcome::Applied(snapshot) => snapshot,
            other => panic!("expected applied command, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_button_sequence() {
        let state = SharedTracker::new();

        assert!(applied(handle_line(&state, "")).running);
        advance(Duration::from_millis(500)).await;
        let stopped = applied(handle_line(&state, "s"));
        assert_eq!(stopped.display, "00:00.50");

        advance(Duration::from_millis(500)).await;
        assert_eq!(applied(handle_line(&state, "status")).display, "00:00.50");

        assert_eq!(applied(handle_line(&state, "r")).display, "00:00.00");
        assert_eq!(handle_line(&state, "quit"), CommandOutcome::Quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_input_changes_nothing() {
        let state = SharedTracker::new();
        applied(handle_line(&state, "seed 02:05.50"));

        assert!(matches!(handle_line(&state, "seed nope"), CommandOutcome::Rejected(_)));
        assert!(matches!(handle_line(&state, "adjust"), CommandOutcome::Rejected(_)));
        assert_eq!(state.sample().unwrap(), Duration::from_millis(125_500));
        assert_eq!(state.get_last_command().0.as_deref(), Some("seed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_seed_keeps_sampling_total() {
        let state = SharedTracker::new();
        applied(handle_line(&state, "seed 0:18446744073709549568"));
        assert!(applied(handle_line(&state, "start")).running);
        advance(Duration::from_secs(4_096)).await;

        assert_eq!(state.sample().unwrap(), Duration::MAX);
        assert_eq!(applied(handle_line(&state, "stop")).elapsed_ms, u64::MAX);
        assert!(!state.is_running().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_seed_while_running_is_rejected() {
        let state = SharedTracker::new();
        handle_command(&state, Command::Start);
        let outcome = handle_command(&state, Command::Seed(Duration::from_secs(10)));
        assert!(matches!(outcome, CommandOutcome::Rejected(_)));
        assert!(state.is_running().unwrap());
    }
}

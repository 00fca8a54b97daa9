//! Status snapshots handed to the display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::format_elapsed;

/// Point-in-time view of the stopwatch, as rendered or emitted as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub running: bool,
    pub elapsed_ms: u64,
    pub display: String,
    pub last_command: Option<String>,
    pub last_command_time: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}

impl StatusSnapshot {
    /// Build a snapshot from a sampled elapsed time
    pub fn new(
        running: bool,
        elapsed: Duration,
        last_command: Option<String>,
        last_command_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            running,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            display: format_elapsed(elapsed),
            last_command,
            last_command_time,
            timestamp: Utc::now(),
        }
    }

    /// The zero state shown before any command
    pub fn idle() -> Self {
        Self::new(false, Duration::ZERO, None, None)
    }

    /// Serialize as a single JSON line
    pub fn to_json_line(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize snapshot: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snapshot_formats_display() {
        let snapshot = StatusSnapshot::new(true, Duration::from_millis(125_500), Some("start".into()), None);
        assert_eq!(snapshot.display, "02:05.50");
        assert_eq!(snapshot.elapsed_ms, 125_500);
        assert!(snapshot.running);
    }

    #[test]
    fn test_snapshot_json_fields() {
        let line = StatusSnapshot::idle().to_json_line().unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["running"], false);
        assert_eq!(value["elapsed_ms"], 0);
        assert_eq!(value["display"], "00:00.00");
        assert!(value["last_command"].is_null());
    }
}

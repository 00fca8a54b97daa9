//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::{tasks::DisplayMode, utils::parse_elapsed};

const MIN_REFRESH_HZ: u32 = 1;
const MAX_REFRESH_HZ: u32 = 240;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "lap-clock")]
#[command(about = "A terminal stopwatch driven by start/stop/reset commands on stdin")]
#[command(version)]
pub struct Config {
    /// Display refresh rate in frames per second
    #[arg(short, long, default_value = "30")]
    pub refresh_hz: u32,

    /// Emit JSON status lines instead of a redrawn text line
    #[arg(long)]
    pub json: bool,

    /// Initial accumulated time, as MM:SS.CC
    #[arg(long)]
    pub seed: Option<String>,

    /// Start running immediately
    #[arg(long)]
    pub start: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Time between display frames, with the rate clamped to a sane range
    pub fn refresh_interval(&self) -> Duration {
        let hz = self.refresh_hz.clamp(MIN_REFRESH_HZ, MAX_REFRESH_HZ);
        Duration::from_secs_f64(1.0 / f64::from(hz))
    }

    /// Get the display mode based on the json flag
    pub fn display_mode(&self) -> DisplayMode {
        if self.json { DisplayMode::Json } else { DisplayMode::Text }
    }

    /// Parse the `--seed` value, if given
    pub fn initial_base(&self) -> Result<Option<Duration>, String> {
        match &self.seed {
            None => Ok(None),
            Some(text) => parse_elapsed(text)
                .map(Some)
                .ok_or_else(|| format!("Invalid --seed value '{}', expected MM:SS.CC", text)),
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("lap-clock").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.refresh_hz, 30);
        assert_eq!(config.display_mode(), DisplayMode::Text);
        assert_eq!(config.initial_base(), Ok(None));
        assert_eq!(config.log_level(), "info");
        assert!(!config.start);
    }

    #[test]
    fn test_refresh_interval_is_clamped() {
        assert_eq!(config(&["--refresh-hz", "10"]).refresh_interval(), Duration::from_millis(100));
        assert_eq!(config(&["-r", "0"]).refresh_interval(), Duration::from_secs(1));
        assert!(config(&["-r", "10000"]).refresh_interval() >= Duration::from_millis(4));
    }

    #[test]
    fn test_seed_flag() {
        assert_eq!(
            config(&["--seed", "01:30"]).initial_base(),
            Ok(Some(Duration::from_secs(90)))
        );
        assert!(config(&["--seed", "later"]).initial_base().is_err());
    }

    #[test]
    fn test_flags() {
        let config = config(&["--json", "--start", "-v"]);
        assert_eq!(config.display_mode(), DisplayMode::Json);
        assert_eq!(config.log_level(), "debug");
        assert!(config.start);
    }
}

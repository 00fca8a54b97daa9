//! Textual stopwatch commands

use std::{fmt, str::FromStr, time::Duration};

use crate::utils::parse_elapsed;

/// A button press or host request read from the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    /// The Start/Stop button
    Toggle,
    Reset,
    /// Replace the accumulated base while stopped
    Seed(Duration),
    Status,
    Quit,
}

impl Command {
    /// Name used for last-command bookkeeping
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Toggle => "toggle",
            Command::Reset => "reset",
            Command::Seed(_) => "seed",
            Command::Status => "status",
            Command::Quit => "quit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" | "s" | "toggle" => Command::Toggle,
            "start" => Command::Start,
            "stop" => Command::Stop,
            "r" | "reset" => Command::Reset,
            "status" => Command::Status,
            "q" | "quit" | "exit" => Command::Quit,
            "seed" => {
                let base = parse_elapsed(arg)
                    .ok_or_else(|| format!("Invalid seed value '{}', expected MM:SS.CC", arg))?;
                return Ok(Command::Seed(base));
            }
            other => return Err(format!("Unknown command: {}", other)),
        };

        if !arg.is_empty() {
            return Err(format!("Command '{}' takes no argument", command));
        }
        Ok(command)
    }
}

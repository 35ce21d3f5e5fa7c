//! Command types for the demo wire surface.
//!
//! This module defines the commands the server binary accepts. The core
//! library never depends on it; it exists for callers speaking the
//! line-oriented protocol.

use crate::error::{StoreError, StoreResult};

/// Types of commands supported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a key-value pair, with an optional TTL in seconds.
    Set,
    /// Get a value by key.
    Get,
    /// Delete a key.
    Delete,
    /// Save a snapshot to a file.
    Save,
    /// Load a snapshot from a file.
    Load,
    /// Ping the server (health check).
    Ping,
    /// Get server statistics.
    Stats,
    /// Invalid or unknown command.
    Invalid,
}

impl Command {
    /// Parse a command from a string.
    ///
    /// Unknown commands map to `Command::Invalid`; parsing is
    /// case-insensitive.
    pub fn get(s: &str) -> Command {
        match s.to_lowercase().as_str() {
            "set" => Command::Set,
            "get" => Command::Get,
            "delete" | "del" => Command::Delete,
            "save" | "save_snapshot" => Command::Save,
            "load" | "load_snapshot" => Command::Load,
            "ping" => Command::Ping,
            "stats" | "info" => Command::Stats,
            _ => Command::Invalid,
        }
    }

    /// Parse a command from a string, returning an error for invalid commands.
    pub fn parse(s: &str) -> StoreResult<Command> {
        let cmd = Self::get(s);
        if cmd == Command::Invalid {
            Err(StoreError::InvalidCommand(s.to_string()))
        } else {
            Ok(cmd)
        }
    }

    /// Get the string representation of this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Set => "set",
            Command::Get => "get",
            Command::Delete => "delete",
            Command::Save => "save",
            Command::Load => "load",
            Command::Ping => "ping",
            Command::Stats => "stats",
            Command::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::get("set"), Command::Set);
        assert_eq!(Command::get("GET"), Command::Get);
        assert_eq!(Command::get("del"), Command::Delete);
        assert_eq!(Command::get("save_snapshot"), Command::Save);
        assert_eq!(Command::get("LOAD"), Command::Load);
        assert_eq!(Command::get("stats"), Command::Stats);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(Command::get("flush"), Command::Invalid);
        assert!(Command::parse("flush").is_err());
        assert!(Command::parse("ping").is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::Save.to_string(), "save");
        assert_eq!(Command::Delete.to_string(), "delete");
    }
}

//! Error types for the snapkv library.
//!
//! Live store operations (`set`/`get`/`delete`) never fail; errors only
//! arise on the snapshot path and the wire surface, and are surfaced as
//! explicit values instead of panics.

use std::fmt;
use std::io;

/// The main error type for store operations.
#[derive(Debug)]
pub enum StoreError {
    /// The command received was invalid or malformed.
    InvalidCommand(String),

    /// Failed to parse the input buffer or protocol message.
    ParseError(String),

    /// An I/O error occurred opening, reading, or writing a snapshot file.
    IoError(io::Error),

    /// The snapshot document could not be serialized or deserialized.
    Serialization(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidCommand(cmd) => write!(f, "invalid command: '{}'", cmd),
            StoreError::ParseError(msg) => write!(f, "parse error: {}", msg),
            StoreError::IoError(err) => write!(f, "I/O error: {}", err),
            StoreError::Serialization(err) => write!(f, "snapshot format error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::IoError(err) => Some(err),
            StoreError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err)
    }
}

/// A specialized Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

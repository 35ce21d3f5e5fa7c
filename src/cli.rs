//! Command-line interface definitions.
//!
//! This module defines the CLI structure for the client binary using clap.

use clap::{Parser, Subcommand};

/// snapkv client.
///
/// A CLI tool for interacting with the snapkv demo server.
#[derive(Parser, Debug)]
#[command(name = "snapkv-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The command to execute.
    #[clap(subcommand)]
    pub command: ClientCommand,
}

/// Available client commands.
#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Get a value by key.
    ///
    /// Prints the stored value; an absent or expired key reads as
    /// "not found".
    Get {
        /// The key to look up.
        key: String,
    },

    /// Set a key-value pair, optionally with a TTL.
    ///
    /// Stores the value at the given key, overwriting any previous value.
    /// With a positive TTL the key expires that many seconds from now.
    Set {
        /// The key to store the value under.
        key: String,
        /// The value to store.
        value: String,
        /// Time-to-live in seconds; 0 applies no new TTL.
        #[arg(default_value_t = 0)]
        ttl: i64,
    },

    /// Delete a key.
    ///
    /// Removes the key and its value from the store.
    Delete {
        /// The key to delete.
        key: String,
    },

    /// Save a snapshot of the store to a file on the server.
    Save {
        /// Destination file; the server's configured path when omitted.
        file: Option<String>,
    },

    /// Load a snapshot from a file on the server, replacing the store.
    Load {
        /// Source file; the server's configured path when omitted.
        file: Option<String>,
    },

    /// Ping the server.
    ///
    /// Checks if the server is running and responsive.
    Ping,

    /// Get server statistics.
    ///
    /// Shows hits, misses, size, hit rate, and snapshot counts.
    Stats,
}

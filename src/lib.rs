//! # snapkv
//!
//! A minimal in-memory key-value store for Rust with per-key TTL
//! expiration and JSON snapshot persistence.
//!
//! ## Features
//!
//! - **TTL support**: every `set` takes a TTL in seconds; expired keys are
//!   lazily evicted when next observed (no background sweeper)
//! - **Snapshots**: save the full state to a two-section JSON document and
//!   load it back, reconciling TTLs against the clock at load time
//! - **Thread-safe**: share across threads with `Clone` (uses `Arc`
//!   internally); both maps sit under a single lock
//! - **Statistics**: track hits, misses, expirations, and snapshot activity
//!
//! ## Quick Start
//!
//! ```rust
//! use snapkv::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::default());
//!
//! // TTL of 0 means no expiration
//! store.set("name", "Alice", 0);
//! store.set("session:abc", "token", 3600);
//!
//! // Absent or expired keys read as the empty string
//! assert_eq!(store.get("name"), "Alice");
//! assert_eq!(store.get("gone"), "");
//!
//! // Persist and restore the full state
//! let path = std::env::temp_dir().join("snapkv_quickstart.json");
//! store.save_snapshot(&path).unwrap();
//!
//! let restored = Store::default();
//! restored.load_snapshot(&path).unwrap();
//! assert_eq!(restored.get("name"), "Alice");
//! ```
//!
//! ## Snapshot format
//!
//! Snapshots are JSON documents with exactly two top-level fields, a shape
//! kept stable for cross-version compatibility:
//!
//! ```json
//! { "data": { "name": "Alice" },
//!   "ttl":  { "session:abc": 1735689600 } }
//! ```
//!
//! `ttl` values are absolute expiration instants in Unix seconds; a key
//! absent from `ttl` lives forever.

// Public API - stable in v1.0.0
pub mod config;
pub mod error;
pub mod stats;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use stats::{StatsSnapshot, StoreStats};
pub use store::Store;

// Internal modules - not part of public API
pub(crate) mod snapshot;
pub(crate) mod storage;

// Wire-surface modules used by the server/client binaries
pub mod cli;
pub mod command;
pub mod utils;

pub use cli::{Cli, ClientCommand};
pub use command::Command;
pub use utils::buffer_to_array;

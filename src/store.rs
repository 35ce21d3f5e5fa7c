//! The main store interface.
//!
//! This module provides the primary `Store` type that users interact with.
//! It wraps the internal storage and the snapshot codec behind a clean,
//! thread-safe API.

use std::path::Path;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::snapshot;
use crate::stats::{StatsSnapshot, StoreStats};
use crate::storage::Db;

/// A thread-safe, in-memory key-value store with per-key TTL and
/// JSON snapshot persistence.
///
/// # Features
/// - **TTL support**: `set` takes a TTL in seconds; expired keys are
///   lazily evicted when observed.
/// - **Snapshots**: the full state can be saved to and restored from a
///   two-section JSON document (`data` + `ttl`).
/// - **Thread-safe**: can be shared across threads by cloning (handles
///   point at the same underlying data).
///
/// # Example
/// ```
/// use snapkv::{Store, StoreConfig};
///
/// let store = Store::new(StoreConfig::default());
///
/// // TTL of 0 (or negative) means the key never expires on its own.
/// store.set("user:123", "Alice", 0);
/// store.set("session:abc", "data", 60);
///
/// assert_eq!(store.get("user:123"), "Alice");
/// assert_eq!(store.get("missing"), ""); // absent keys read as empty
///
/// assert!(store.delete("user:123"));
/// assert!(!store.delete("user:123"));
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    /// Internal storage.
    db: Arc<Db>,
}

impl Store {
    /// Create a new store with the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            db: Arc::new(Db::new(config)),
        }
    }

    /// Set a key to a value with a TTL in seconds.
    ///
    /// A positive `ttl_seconds` makes the key expire `ttl_seconds` from
    /// now, replacing any earlier deadline. Zero or negative applies no
    /// new TTL, but a deadline from an earlier `set` stays in force; this
    /// matches the historical behavior and snapshot files in the wild.
    /// Never fails.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>, ttl_seconds: i64) {
        self.db.set(key, value, ttl_seconds);
    }

    /// Get the value for a key, with the lossy binding contract: the empty
    /// string means absent or expired.
    ///
    /// Callers cannot distinguish a missing key from a key holding the
    /// empty string; use [`Store::lookup`] when that distinction matters.
    ///
    /// # Example
    /// ```
    /// use snapkv::Store;
    ///
    /// let store = Store::default();
    /// store.set("key", "value", 0);
    /// assert_eq!(store.get("key"), "value");
    /// assert_eq!(store.get("nope"), "");
    /// ```
    pub fn get(&self, key: &str) -> String {
        self.db.get(key).unwrap_or_default()
    }

    /// Get the value for a key, distinguishing absence from an empty value.
    ///
    /// Returns `None` if the key doesn't exist or has expired. An expired
    /// key is evicted from the store the moment this observes it.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.db.get(key)
    }

    /// Delete a key from the store.
    ///
    /// Returns `true` if the key existed and was removed.
    ///
    /// # Example
    /// ```
    /// use snapkv::Store;
    ///
    /// let store = Store::default();
    /// store.set("key", "value", 0);
    /// assert!(store.delete("key"));
    /// assert!(!store.delete("key")); // Already deleted
    /// ```
    pub fn delete(&self, key: &str) -> bool {
        self.db.delete(key)
    }

    /// Check if a key exists in the store (and is not expired).
    pub fn contains(&self, key: &str) -> bool {
        self.db.contains(key)
    }

    /// Get the number of entries in the store.
    ///
    /// Note: this may include expired entries that have not been observed
    /// and lazily evicted yet.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Remove all entries from the store.
    pub fn clear(&self) {
        self.db.clear();
    }

    /// Save a snapshot of the full store state to `path`.
    ///
    /// Writes the two-section JSON document, replacing whatever was at the
    /// destination, and prints a confirmation line. Keys that are expired
    /// but not yet lazily evicted are included; the load side reconciles
    /// them. The store itself is not modified.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        match snapshot::save(&self.db, path) {
            Ok(()) => {
                self.db.stats().record_snapshot_save();
                println!("Snapshot saved to {}", path.display());
                Ok(())
            }
            Err(e) => {
                eprintln!("Could not save snapshot to {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Replace the full store state from the snapshot at `path`.
    ///
    /// All-or-nothing: if the file cannot be opened or parsed, the store
    /// is left exactly as it was and the error is returned. On success
    /// both maps are replaced wholesale; snapshot entries whose deadline
    /// already passed are dropped during the load.
    pub fn load_snapshot(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        match snapshot::load(&self.db, path) {
            Ok(()) => {
                self.db.stats().record_snapshot_load();
                println!("Snapshot loaded from {}", path.display());
                Ok(())
            }
            Err(e) => {
                eprintln!("Could not load snapshot from {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// The configured default snapshot path.
    pub fn snapshot_path(&self) -> std::path::PathBuf {
        self.db.config().get_snapshot_path().to_path_buf()
    }

    /// Manually remove all currently-expired entries.
    ///
    /// Expiration is otherwise lazy (checked on read), so memory for
    /// expired-but-unread keys is retained until this is called or the
    /// key is next observed. Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        self.db.cleanup_expired()
    }

    /// Get a snapshot of the store statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.db.stats().snapshot()
    }

    /// Get a reference to the internal statistics counter.
    ///
    /// This is useful for integrating with external metrics systems.
    pub fn stats_ref(&self) -> Arc<StoreStats> {
        self.db.stats()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_basic_operations() {
        let store = Store::default();

        store.set("key", "value", 0);
        assert_eq!(store.get("key"), "value");
        assert!(store.contains("key"));

        store.delete("key");
        assert!(!store.contains("key"));
        assert_eq!(store.get("key"), "");
    }

    #[test]
    fn test_empty_value_indistinguishable_from_absent() {
        let store = Store::default();

        store.set("blank", "", 0);
        assert_eq!(store.get("blank"), "");
        assert_eq!(store.get("missing"), "");

        // The strict variant can still tell them apart
        assert_eq!(store.lookup("blank"), Some(String::new()));
        assert_eq!(store.lookup("missing"), None);
    }

    #[test]
    fn test_store_is_clone() {
        let store1 = Store::default();
        store1.set("key", "value", 0);

        let store2 = store1.clone();

        // Both point to the same underlying data
        assert_eq!(store2.get("key"), "value");

        store2.set("key2", "value2", 0);
        assert_eq!(store1.get("key2"), "value2");
    }

    #[test]
    fn test_store_stats() {
        let store = Store::default();

        store.set("key", "value", 0);
        let _ = store.get("key");
        let _ = store.get("missing");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_snapshot_path_from_config() {
        let store = Store::new(StoreConfig::new().snapshot_path("/tmp/a.json").build());
        assert_eq!(store.snapshot_path(), std::path::PathBuf::from("/tmp/a.json"));
    }

    #[test]
    fn test_store_thread_safety() {
        use std::thread;

        let store = Store::default();
        let mut handles = vec![];

        // Spawn multiple threads that read/write concurrently
        for i in 0..10 {
            let store = store.clone();
            let handle = thread::spawn(move || {
                for j in 0..100 {
                    let key = format!("key_{}", j);
                    store.set(key.clone(), format!("value_{}_{}", i, j), 0);
                    let _ = store.get(&key);
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        // Should have completed without panics
        assert!(!store.is_empty());
    }
}

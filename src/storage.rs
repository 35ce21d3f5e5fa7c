//! Internal storage implementation for the store.
//!
//! Two parallel maps realize the data model: `values` maps keys to their
//! string values, `expirations` maps keys to an absolute expiration instant
//! in Unix seconds. A key absent from `expirations` never expires. Both maps
//! live under a single lock so every operation observes them consistently.

use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::StoreConfig;
use crate::stats::StoreStats;

/// Current wall-clock time in whole seconds since the Unix epoch.
///
/// Wall clock rather than a monotonic clock, so expiration instants stay
/// meaningful inside persisted snapshots across process restarts.
pub(crate) fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// The two maps that make up the store's state.
///
/// Invariant: every key in `expirations` was present in `values` when its
/// TTL was set. Snapshot loading re-establishes the invariant by dropping
/// orphan expiration records.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tables {
    /// Key to value. Keys are unique; insertion order is irrelevant.
    pub(crate) values: IndexMap<String, String>,

    /// Key to absolute expiration instant (Unix seconds). Only keys with a
    /// finite TTL appear here.
    pub(crate) expirations: IndexMap<String, u64>,
}

/// Thread-safe wrapper around the internal maps.
///
/// This is the internal implementation; users should use `Store` instead.
#[derive(Debug)]
pub struct Db {
    /// Both maps, protected by a single read-write lock.
    tables: RwLock<Tables>,

    /// Configuration for this store instance.
    config: StoreConfig,

    /// Statistics for store operations.
    stats: Arc<StoreStats>,
}

impl Db {
    /// Create a new database with the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            config,
            stats: Arc::new(StoreStats::new()),
        }
    }

    /// Create a new database with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(StoreConfig::default())
    }

    /// Set a key to a value with the given TTL in seconds.
    ///
    /// A positive `ttl_seconds` records an absolute expiration of
    /// `now + ttl_seconds`. Zero or negative leaves any prior expiration
    /// for the key untouched; see `set_at` for the details.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>, ttl_seconds: i64) {
        self.set_at(key.into(), value.into(), ttl_seconds, now_unix_secs());
    }

    /// Set a key against an explicit current time.
    /// This is useful for testing with a controlled clock.
    ///
    /// The value is always overwritten. With `ttl_seconds <= 0` a prior
    /// expiration survives: only the value changes, and the key keeps its
    /// old deadline. Compatibility with the original behavior; callers who
    /// want "never expires" must `delete` first.
    pub fn set_at(&self, key: String, value: String, ttl_seconds: i64, now: u64) {
        let mut tables = match self.write_lock() {
            Some(t) => t,
            None => return, // Lock poisoned, silently fail
        };

        if ttl_seconds > 0 {
            tables
                .expirations
                .insert(key.clone(), now + ttl_seconds as u64);
        }

        let is_new = tables.values.insert(key, value).is_none();

        if is_new {
            self.stats.increment_size();
        }
        self.stats.record_set();
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist or has expired. An expired
    /// key is evicted from both maps the moment it is observed.
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_at(key, now_unix_secs())
    }

    /// Get a value against an explicit current time.
    /// This is useful for testing with a controlled clock.
    pub fn get_at(&self, key: &str, now: u64) -> Option<String> {
        // First, try to read with a read lock
        {
            let tables = self.read_lock()?;

            if let Some(&expiry) = tables.expirations.get(key) {
                if now > expiry {
                    // Entry expired - need write lock to evict it
                    drop(tables);
                    self.remove_expired_at(key, now);
                    self.stats.record_miss();
                    self.stats.record_expiration();
                    return None;
                }
            }

            if let Some(value) = tables.values.get(key) {
                let value = value.clone();
                self.stats.record_hit();
                return Some(value);
            }
        }

        self.stats.record_miss();
        None
    }

    /// Delete a key from the store.
    ///
    /// Returns `true` if the key existed and was removed. Removes the key
    /// from both maps.
    pub fn delete(&self, key: &str) -> bool {
        let mut tables = match self.write_lock() {
            Some(t) => t,
            None => return false,
        };

        let existed = tables.values.shift_remove(key).is_some();
        if existed {
            tables.expirations.shift_remove(key);
            self.stats.decrement_size();
            self.stats.record_delete();
        }
        existed
    }

    /// Check if a key exists in the store (and is not expired).
    pub fn contains(&self, key: &str) -> bool {
        self.contains_at(key, now_unix_secs())
    }

    /// Check existence against an explicit current time.
    pub fn contains_at(&self, key: &str, now: u64) -> bool {
        let tables = match self.read_lock() {
            Some(t) => t,
            None => return false,
        };

        if let Some(&expiry) = tables.expirations.get(key) {
            if now > expiry {
                drop(tables);
                self.remove_expired_at(key, now);
                return false;
            }
        }

        tables.values.contains_key(key)
    }

    /// Get the number of entries in the store.
    ///
    /// Note: This may include expired entries that haven't been observed
    /// and lazily evicted yet.
    pub fn len(&self) -> usize {
        match self.read_lock() {
            Some(tables) => tables.values.len(),
            None => 0,
        }
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries from the store.
    pub fn clear(&self) {
        if let Some(mut tables) = self.write_lock() {
            tables.values.clear();
            tables.expirations.clear();
            self.stats.set_size(0);
        }
    }

    /// Get a reference to the statistics.
    pub fn stats(&self) -> Arc<StoreStats> {
        Arc::clone(&self.stats)
    }

    /// Get a reference to the configuration.
    pub(crate) fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Remove all expired entries from the store.
    ///
    /// Expiration is otherwise lazy; this is an explicit reclamation helper
    /// for callers that want memory back before the next read.
    /// Returns the number of entries that were removed.
    pub fn cleanup_expired(&self) -> usize {
        self.cleanup_expired_at(now_unix_secs())
    }

    /// Remove expired entries against an explicit current time.
    pub fn cleanup_expired_at(&self, now: u64) -> usize {
        let mut tables = match self.write_lock() {
            Some(t) => t,
            None => return 0,
        };

        let expired: Vec<String> = tables
            .expirations
            .iter()
            .filter(|(_, &expiry)| now > expiry)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            tables.values.shift_remove(key);
            tables.expirations.shift_remove(key);
            self.stats.record_expiration();
            self.stats.decrement_size();
        }

        expired.len()
    }

    /// Clone the current maps, for snapshot serialization.
    pub(crate) fn export_tables(&self) -> Tables {
        self.read_lock().map(|t| t.clone()).unwrap_or_default()
    }

    /// Replace both maps wholesale, for snapshot loading.
    pub(crate) fn replace_tables(&self, new: Tables) {
        if let Some(mut tables) = self.write_lock() {
            self.stats.set_size(new.values.len() as u64);
            *tables = new;
        }
    }

    // Private helper methods

    /// Acquire a read lock, returning None if poisoned.
    fn read_lock(&self) -> Option<RwLockReadGuard<'_, Tables>> {
        self.tables.read().ok()
    }

    /// Acquire a write lock, returning None if poisoned.
    fn write_lock(&self) -> Option<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().ok()
    }

    /// Remove a specific key, provided it is still expired at `now`.
    fn remove_expired_at(&self, key: &str, now: u64) {
        if let Some(mut tables) = self.write_lock() {
            if let Some(&expiry) = tables.expirations.get(key) {
                if now > expiry {
                    tables.values.shift_remove(key);
                    tables.expirations.shift_remove(key);
                    self.stats.decrement_size();
                }
            }
        }
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// Implement Clone by creating a new Db with cloned data
impl Clone for Db {
    fn clone(&self) -> Self {
        let tables = self.export_tables();

        Self {
            tables: RwLock::new(tables),
            config: self.config.clone(),
            stats: Arc::new(StoreStats::new()), // New stats for cloned instance
        }
    }
}

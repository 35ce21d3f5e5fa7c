//! Point-in-time snapshot persistence for the store.
//!
//! A snapshot is a JSON document with exactly two top-level sections:
//!
//! ```json
//! { "data": { "key": "value" },
//!   "ttl":  { "key": 1735689600 } }
//! ```
//!
//! `data` holds every live key/value pair; `ttl` holds absolute expiration
//! instants in Unix seconds for the keys that have one. The two-section
//! shape is the on-disk contract and must stay stable across versions.
//!
//! Loading is all-or-nothing: the document is fully parsed before the
//! store's maps are touched, so a missing or malformed file never leaves
//! the store half-replaced.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::StoreResult;
use crate::storage::{now_unix_secs, Db, Tables};

/// The persisted snapshot document.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SnapshotDoc {
    /// Every key and its value, as of save time. Keys that are logically
    /// expired but not yet lazily evicted are saved as if still live;
    /// reconciliation happens at load time.
    data: IndexMap<String, String>,

    /// Absolute expiration instants (Unix seconds) for keys with a TTL.
    ttl: IndexMap<String, u64>,
}

/// Serialize the store's current state to `path`.
///
/// The document is written to a `.tmp` sibling first and renamed into
/// place, so a crash mid-write never truncates an existing snapshot.
/// Overwrites any previous content at the destination.
pub(crate) fn save(db: &Db, path: &Path) -> StoreResult<()> {
    let tables = db.export_tables();
    let doc = SnapshotDoc {
        data: tables.values,
        ttl: tables.expirations,
    };

    let json = if db.config().get_pretty() {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    Ok(())
}

/// Replace the store's state from the snapshot at `path`.
///
/// Reconciles TTLs against the current wall clock: entries whose deadline
/// has already passed are dropped during the load.
pub(crate) fn load(db: &Db, path: &Path) -> StoreResult<()> {
    load_at(db, path, now_unix_secs())
}

/// Load against an explicit current time.
/// This is useful for testing with a controlled clock.
pub(crate) fn load_at(db: &Db, path: &Path, now: u64) -> StoreResult<()> {
    // Any failure up to here leaves the store unmodified.
    let contents = fs::read_to_string(path)?;
    let doc: SnapshotDoc = serde_json::from_str(&contents)?;

    let mut tables = Tables {
        values: doc.data,
        expirations: IndexMap::new(),
    };

    for (key, expiry) in doc.ttl {
        if !tables.values.contains_key(&key) {
            // Orphan TTL record with no value; a data-integrity anomaly,
            // ignored rather than given a fabricated value.
            continue;
        }
        if expiry > now {
            tables.expirations.insert(key, expiry);
        } else {
            // Already expired while on disk; dropped at load, not lazily.
            tables.values.shift_remove(&key);
        }
    }

    db.replace_tables(tables);
    Ok(())
}

//! Configuration for the store.
//!
//! This module provides a builder pattern for configuring store behavior,
//! mainly around snapshot persistence.

use std::path::{Path, PathBuf};

/// The snapshot filename used when none is configured or given.
pub const DEFAULT_SNAPSHOT_PATH: &str = "snapshot.json";

/// Configuration for creating a new store instance.
///
/// Use the builder pattern to construct configuration:
///
/// ```
/// use snapkv::StoreConfig;
///
/// let config = StoreConfig::new()
///     .snapshot_path("/var/lib/snapkv/snapshot.json")
///     .pretty(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Default destination for snapshots when `save_snapshot`/`load_snapshot`
    /// are invoked without an explicit filename.
    pub(crate) snapshot_path: PathBuf,

    /// Whether snapshots are written as pretty-printed JSON.
    /// Compact and pretty documents are equally loadable.
    pub(crate) pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            pretty: false,
        }
    }
}

impl StoreConfig {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default snapshot path.
    pub fn snapshot_path(mut self, path: impl AsRef<Path>) -> Self {
        self.snapshot_path = path.as_ref().to_path_buf();
        self
    }

    /// Enable or disable pretty-printed snapshot output.
    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Self {
        self
    }

    /// Get the configured default snapshot path.
    pub fn get_snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Whether snapshots are pretty-printed.
    pub fn get_pretty(&self) -> bool {
        self.pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.snapshot_path, PathBuf::from(DEFAULT_SNAPSHOT_PATH));
        assert!(!config.pretty);
    }

    #[test]
    fn test_builder_pattern() {
        let config = StoreConfig::new()
            .snapshot_path("/tmp/dump.json")
            .pretty(true)
            .build();

        assert_eq!(config.get_snapshot_path(), Path::new("/tmp/dump.json"));
        assert!(config.get_pretty());
    }
}

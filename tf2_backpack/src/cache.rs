//! Persistent per-user backpack cache
//!
//! Snapshots are stored one JSON file per SteamID64 in the cache directory.
//! Writes go to a temp file first and are renamed into place, so readers see
//! either the previous complete record or the new one.

use std::path::{Path, PathBuf};

use steam_common::SteamId;

use crate::error::CacheError;
use crate::models::Backpack;

/// Seconds a snapshot stays fresh (24h)
pub const FRESHNESS_WINDOW_SECS: i64 = 86_400;

/// Key-value storage for backpack snapshots
pub trait BackpackStore: Send + Sync {
    /// Stored snapshot regardless of age, `None` if there is none
    fn get(&self, id: &SteamId) -> Result<Option<Backpack>, CacheError>;

    /// Replace the stored snapshot for `id`
    fn put(&self, id: &SteamId, backpack: &Backpack) -> Result<(), CacheError>;
}

/// [`BackpackStore`] backed by `{dir}/{steamid}.json` files
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create the store, creating `dir` if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        log::info!("Backpack cache directory: {:?}", dir);
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path for a cached snapshot
    pub fn path(&self, id: &SteamId) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    fn temp_path(&self, id: &SteamId) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", id))
    }
}

impl BackpackStore for FileStore {
    fn get(&self, id: &SteamId) -> Result<Option<Backpack>, CacheError> {
        let json = match std::fs::read_to_string(self.path(id)) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn put(&self, id: &SteamId, backpack: &Backpack) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(backpack)?;
        let temp = self.temp_path(id);

        std::fs::write(&temp, json)?;
        if let Err(e) = std::fs::rename(&temp, self.path(id)) {
            let _ = std::fs::remove_file(&temp);
            return Err(e.into());
        }

        log::debug!("Cached backpack for {} ({} items)", id, backpack.items.len());
        Ok(())
    }
}

/// Freshness-gated access to a [`BackpackStore`]
pub struct CacheStore {
    store: Box<dyn BackpackStore>,
    freshness_secs: i64,
}

impl CacheStore {
    pub fn new(store: Box<dyn BackpackStore>) -> Self {
        Self::with_freshness(store, FRESHNESS_WINDOW_SECS)
    }

    pub fn with_freshness(store: Box<dyn BackpackStore>, freshness_secs: i64) -> Self {
        Self {
            store,
            freshness_secs,
        }
    }

    /// Snapshot for `id` if one exists and is no older than the freshness window.
    ///
    /// Unreadable or corrupt entries are logged and reported as a miss.
    pub fn load(&self, id: &SteamId, now: i64) -> Option<Backpack> {
        let backpack = self.load_any(id)?;
        let age = backpack.age(now);

        if age > self.freshness_secs {
            log::info!(
                "Cached backpack for {} is stale ({}s old), refreshing",
                id,
                age
            );
            return None;
        }

        log::info!("Cache hit for {} ({}s old)", id, age);
        Some(backpack)
    }

    /// Snapshot for `id` regardless of age
    pub fn load_any(&self, id: &SteamId) -> Option<Backpack> {
        match self.store.get(id) {
            Ok(Some(backpack)) => Some(backpack),
            Ok(None) => {
                log::info!("No cached backpack for {}", id);
                None
            }
            Err(e) => {
                log::warn!("Failed to read cached backpack for {}: {}", id, e);
                None
            }
        }
    }

    pub fn save(&self, id: &SteamId, backpack: &Backpack) -> Result<(), CacheError> {
        self.store.put(id, backpack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_backpack;
    use tempfile::TempDir;

    fn steam_id() -> SteamId {
        "76561197960287930".parse().unwrap()
    }

    fn file_cache() -> (CacheStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();
        (CacheStore::new(Box::new(store)), temp_dir)
    }

    #[test]
    fn test_get_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();
        assert!(store.get(&steam_id()).unwrap().is_none());
    }

    #[test]
    fn test_put_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();
        let backpack = sample_backpack(1_700_000_000);

        store.put(&steam_id(), &backpack).unwrap();

        assert!(temp_dir.path().join("76561197960287930.json").exists());
        assert!(!temp_dir.path().join("76561197960287930.json.tmp").exists());
        assert_eq!(store.get(&steam_id()).unwrap(), Some(backpack));
    }

    #[test]
    fn test_put_replaces_previous_entry() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();

        store.put(&steam_id(), &sample_backpack(100)).unwrap();
        let mut newer = sample_backpack(200);
        newer.items.clear();
        store.put(&steam_id(), &newer).unwrap();

        let stored = store.get(&steam_id()).unwrap().unwrap();
        assert_eq!(stored.last_updated, 200);
        assert!(stored.items.is_empty());
    }

    #[test]
    fn test_new_creates_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("a").join("cache");
        let store = FileStore::new(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn test_load_fresh_within_window() {
        let (cache, _dir) = file_cache();
        cache.save(&steam_id(), &sample_backpack(1_000)).unwrap();

        assert!(cache.load(&steam_id(), 1_000).is_some());
        assert!(cache.load(&steam_id(), 1_000 + FRESHNESS_WINDOW_SECS).is_some());
    }

    #[test]
    fn test_load_stale_past_window() {
        let (cache, _dir) = file_cache();
        cache.save(&steam_id(), &sample_backpack(1_000)).unwrap();

        assert!(cache
            .load(&steam_id(), 1_000 + FRESHNESS_WINDOW_SECS + 1)
            .is_none());
        // still readable for hash comparison
        assert!(cache.load_any(&steam_id()).is_some());
    }

    #[test]
    fn test_load_missing_is_miss() {
        let (cache, _dir) = file_cache();
        assert!(cache.load(&steam_id(), 0).is_none());
    }

    #[test]
    fn test_corrupt_entry_is_miss() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();
        std::fs::write(store.path(&steam_id()), "{ not json").unwrap();

        assert!(matches!(store.get(&steam_id()), Err(CacheError::Serialize(_))));

        let cache = CacheStore::new(Box::new(store));
        assert!(cache.load(&steam_id(), 0).is_none());
    }

    #[test]
    fn test_custom_freshness_window() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();
        let cache = CacheStore::with_freshness(Box::new(store), 60);
        cache.save(&steam_id(), &sample_backpack(0)).unwrap();

        assert!(cache.load(&steam_id(), 60).is_some());
        assert!(cache.load(&steam_id(), 61).is_none());
    }
}

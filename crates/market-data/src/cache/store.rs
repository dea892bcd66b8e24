use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{CacheSnapshot, SchemeCatalogEntry};

/// Persistence for a single catalog snapshot.
///
/// `read` never fails: a missing, unreadable or corrupt snapshot is `None`.
pub trait CacheStore: Send + Sync {
    fn read(&self) -> Option<CacheSnapshot>;

    fn write(&self, snapshot: &CacheSnapshot) -> Result<(), MarketDataError>;
}

/// Snapshot stored as a JSON array of `{code, name}`; its age is the file's mtime.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    path: PathBuf,
}

impl FileCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "catalog.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
    }

    fn try_read(&self) -> std::io::Result<CacheSnapshot> {
        let modified = fs::metadata(&self.path)?.modified()?;
        let raw = fs::read(&self.path)?;
        let payload: Vec<SchemeCatalogEntry> = serde_json::from_slice(&raw)?;
        Ok(CacheSnapshot::new(payload, DateTime::<Utc>::from(modified)))
    }
}

impl CacheStore for FileCacheStore {
    fn read(&self) -> Option<CacheSnapshot> {
        match self.try_read() {
            Ok(snapshot) => Some(snapshot),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No catalog snapshot at {}", self.path.display());
                None
            }
            Err(e) => {
                warn!(
                    "Error loading catalog snapshot {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Write to a sibling temp file, stamp it with `fetched_at`, then rename it
    /// over the target so readers never see a partial file.
    fn write(&self, snapshot: &CacheSnapshot) -> Result<(), MarketDataError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec(&snapshot.payload)
            .map_err(|e| MarketDataError::Cache(e.to_string()))?;

        let temp_path = self.temp_path();
        let result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(&json)?;
            file.set_modified(SystemTime::from(snapshot.fetched_at))?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result.map_err(MarketDataError::from)
    }
}

/// In-process store, used where no file should be touched.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    snapshot: RwLock<Option<CacheSnapshot>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: CacheSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }
}

impl CacheStore for MemoryCacheStore {
    fn read(&self) -> Option<CacheSnapshot> {
        self.snapshot.read().ok()?.clone()
    }

    fn write(&self, snapshot: &CacheSnapshot) -> Result<(), MarketDataError> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| MarketDataError::Cache("Memory cache lock poisoned".into()))?;
        *guard = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn snapshot_at(fetched_at: DateTime<Utc>) -> CacheSnapshot {
        CacheSnapshot::new(
            vec![
                SchemeCatalogEntry::new("SM001001", "SBI PENSION FUND SCHEME - CENTRAL GOVT"),
                SchemeCatalogEntry::new("SM008001", "HDFC PENSION MANAGEMENT COMPANY LTD-SCHEME E-TIER I"),
            ],
            fetched_at,
        )
    }

    #[test]
    fn test_file_store_missing_file_reads_none() {
        let dir = tempdir().unwrap();
        let store = FileCacheStore::new(dir.path().join("nps_data.json"));
        assert!(store.read().is_none());
    }

    #[test]
    fn test_file_store_round_trip_keeps_fetched_at() {
        let dir = tempdir().unwrap();
        let store = FileCacheStore::new(dir.path().join("nested").join("nps_data.json"));
        let fetched_at = Utc::now() - chrono::Duration::hours(30);

        store.write(&snapshot_at(fetched_at)).unwrap();
        let read = store.read().unwrap();

        assert_eq!(read.payload, snapshot_at(fetched_at).payload);
        let drift = (read.fetched_at - fetched_at).num_seconds().abs();
        assert!(drift <= 1, "mtime drifted by {}s", drift);
    }

    #[test]
    fn test_file_store_writes_plain_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nps_data.json");
        FileCacheStore::new(&path)
            .write(&snapshot_at(Utc::now()))
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[0]["code"], "SM001001");
        assert_eq!(raw.as_array().unwrap().len(), 2);

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_file_store_corrupt_file_reads_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nps_data.json");
        fs::write(&path, "{not json").unwrap();
        assert!(FileCacheStore::new(&path).read().is_none());
    }

    #[test]
    fn test_file_store_write_into_file_parent_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = FileCacheStore::new(blocker.join("nps_data.json"));

        let result = store.write(&snapshot_at(Utc::now()));
        assert!(matches!(result, Err(MarketDataError::Cache(_))));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryCacheStore::new();
        assert!(store.read().is_none());

        let snapshot = snapshot_at(Utc::now());
        store.write(&snapshot).unwrap();
        assert_eq!(store.read(), Some(snapshot));
    }
}

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::cache::CacheStore;
use crate::models::{CacheSnapshot, SchemeCatalogEntry};

/// Default snapshot lifetime
pub const DEFAULT_CATALOG_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// TTL-bounded catalog backed by a [`CacheStore`] with a bundled fallback.
///
/// A usable snapshot is returned verbatim. Otherwise the fallback dataset is
/// written as a fresh snapshot and returned; no live upstream is consulted,
/// so a refresh only resets the age of the same data.
pub struct CatalogCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    fallback: Vec<SchemeCatalogEntry>,
    refresh_lock: Mutex<()>,
}

impl CatalogCache {
    pub fn new(
        store: Arc<dyn CacheStore>,
        ttl: Duration,
        fallback: Vec<SchemeCatalogEntry>,
    ) -> Self {
        Self {
            store,
            ttl,
            fallback,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get_catalog(&self) -> Vec<SchemeCatalogEntry> {
        if let Some(snapshot) = self.usable_snapshot() {
            return snapshot.payload;
        }

        // Concurrent misses queue here; only the first one writes.
        let _guard = self
            .refresh_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(snapshot) = self.usable_snapshot() {
            return snapshot.payload;
        }

        let snapshot = CacheSnapshot::new(self.fallback.clone(), Utc::now());
        match self.store.write(&snapshot) {
            Ok(()) => info!(
                "Catalog snapshot refreshed from bundled list ({} entries)",
                snapshot.payload.len()
            ),
            Err(e) => warn!("Error caching catalog snapshot: {}", e),
        }
        snapshot.payload
    }

    fn usable_snapshot(&self) -> Option<CacheSnapshot> {
        self.store
            .read()
            .filter(|snapshot| snapshot.is_usable(self.ttl, Utc::now()))
    }
}

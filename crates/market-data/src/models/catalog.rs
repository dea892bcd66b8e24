use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the NPS scheme catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeCatalogEntry {
    pub code: String,
    pub name: String,
}

impl SchemeCatalogEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A persisted copy of the scheme catalog and the time it was written.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheSnapshot {
    pub payload: Vec<SchemeCatalogEntry>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheSnapshot {
    pub fn new(payload: Vec<SchemeCatalogEntry>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            fetched_at,
        }
    }

    /// A snapshot is usable iff it is younger than `ttl` and non-empty.
    ///
    /// A `fetched_at` in the future (clock skew, touched file) counts as age zero.
    pub fn is_usable(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        if self.payload.is_empty() {
            return false;
        }
        let age = (now - self.fetched_at).to_std().unwrap_or(Duration::ZERO);
        age < ttl
    }
}

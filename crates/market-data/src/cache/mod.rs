//! Reference-data cache for catalogs that are searched locally.
//!
//! - [`CacheStore`]: where a [`CacheSnapshot`](crate::models::CacheSnapshot) lives
//! - [`FileCacheStore`] / [`MemoryCacheStore`]: the two stores
//! - [`CatalogCache`]: TTL policy plus a bundled fallback dataset

mod catalog_cache;
mod store;

pub use catalog_cache::{CatalogCache, DEFAULT_CATALOG_TTL};
pub use store::{CacheStore, FileCacheStore, MemoryCacheStore};

//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `instrument` - Searchable instrument identity (Instrument) and AssetClass enum
//! - `quote` - Precious metal price records (Metal, MetalQuote, MetalPrices)
//! - `catalog` - NPS reference data (SchemeCatalogEntry, CacheSnapshot)

mod catalog;
mod instrument;
mod quote;

pub use catalog::{CacheSnapshot, SchemeCatalogEntry};
pub use instrument::{AssetClass, Instrument};
pub use quote::{Metal, MetalPrices, MetalQuote};

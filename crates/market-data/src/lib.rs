//! MarketGate Market Data Crate
//!
//! This crate looks up instruments and their current prices across five
//! asset classes for the MarketGate gateway.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Stocks (Yahoo Finance), mutual funds (mfapi.in), crypto (CoinGecko)
//! - NPS schemes searched from a cached local catalog, priced by npsnav.in
//! - Gold and silver rates scraped from public HTML pages
//!
//! # Architecture
//!
//! ```text
//! +---------------------+
//! |  MarketDataService  |  (dispatch by asset class)
//! +---------------------+
//!        |          |
//!        v          v
//! +-------------+  +--------------------+
//! |  Provider   |  |  MetalPriceSource  |
//! +-------------+  +--------------------+
//!   |        |               |
//!   v        v               v
//! REST   CatalogCache   page fetch -> CellLocator -> clean_number
//!            |
//!            v
//!       CacheStore (file / memory)
//! ```
//!
//! # Core Types
//!
//! - [`AssetClass`] - The five classes the gateway serves
//! - [`Instrument`] - A search hit: code, name, asset class
//! - [`MetalQuote`] - Today / yesterday / change for one metal grade
//! - [`CacheSnapshot`] - A persisted scheme catalog with its fetch time
//! - [`MarketDataError`] - Not found vs upstream vs timeout vs parse failures

pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod provider;
pub mod scrape;
pub mod search;
pub mod service;
pub mod utils;

pub use config::MarketDataConfig;
pub use errors::MarketDataError;
pub use service::MarketDataService;

// Re-export all public types from models
pub use models::{
    AssetClass, CacheSnapshot, Instrument, Metal, MetalPrices, MetalQuote, SchemeCatalogEntry,
};

// Re-export provider types
pub use provider::crypto::CryptoProvider;
pub use provider::metals::{GradeLayout, MetalPageLayout, MetalsScraper};
pub use provider::mutual_fund::MutualFundProvider;
pub use provider::nps::NpsProvider;
pub use provider::stock::StockProvider;
pub use provider::{MarketDataProvider, MetalPriceSource};

pub use cache::{CacheStore, CatalogCache, FileCacheStore, MemoryCacheStore};
pub use scrape::{clean_number, CellLocator};
pub use search::search_catalog;

//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait implemented once per searchable asset class
//! - The `MetalPriceSource` trait for scraped precious metal pages
//! - Concrete implementations (Yahoo, mfapi.in, CoinGecko, npsnav.in, page scraping)
//!
//! Every provider makes a single upstream call per operation, with a fixed
//! timeout and no retries. Failures are returned as [`MarketDataError`]
//! variants and never panic.
//!
//! [`MarketDataError`]: crate::errors::MarketDataError

mod rest;
mod traits;

pub mod crypto;
pub mod metals;
pub mod mutual_fund;
pub mod nps;
pub mod stock;

pub use rest::REST_TIMEOUT;
pub use traits::{MarketDataProvider, MetalPriceSource};

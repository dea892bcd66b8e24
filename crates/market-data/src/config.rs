//! Upstream endpoints and cache settings for the providers.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::DEFAULT_CATALOG_TTL;
use crate::provider::crypto::DEFAULT_COINGECKO_API_URL;
use crate::provider::metals::{DEFAULT_GOLD_PAGE_URL, DEFAULT_SILVER_PAGE_URL};
use crate::provider::mutual_fund::DEFAULT_MF_API_URL;
use crate::provider::nps::DEFAULT_NPS_API_URL;

/// Default location of the persisted NPS scheme catalog
pub const DEFAULT_NPS_CACHE_PATH: &str = "./data/nps_data.json";

/// Settings for [`MarketDataService::from_config`](crate::MarketDataService::from_config).
///
/// `Default` points at the production upstreams.
#[derive(Clone, Debug)]
pub struct MarketDataConfig {
    pub mf_api_url: String,
    pub coingecko_api_url: String,
    pub nps_api_url: String,
    pub gold_page_url: String,
    pub silver_page_url: String,
    pub nps_cache_path: PathBuf,
    pub nps_cache_ttl: Duration,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            mf_api_url: DEFAULT_MF_API_URL.to_string(),
            coingecko_api_url: DEFAULT_COINGECKO_API_URL.to_string(),
            nps_api_url: DEFAULT_NPS_API_URL.to_string(),
            gold_page_url: DEFAULT_GOLD_PAGE_URL.to_string(),
            silver_page_url: DEFAULT_SILVER_PAGE_URL.to_string(),
            nps_cache_path: PathBuf::from(DEFAULT_NPS_CACHE_PATH),
            nps_cache_ttl: DEFAULT_CATALOG_TTL,
        }
    }
}

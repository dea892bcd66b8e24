//! One entry point over every provider, keyed by asset class.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{CatalogCache, FileCacheStore};
use crate::config::MarketDataConfig;
use crate::errors::MarketDataError;
use crate::models::{AssetClass, Instrument, Metal, MetalPrices};
use crate::provider::crypto::CryptoProvider;
use crate::provider::metals::MetalsScraper;
use crate::provider::mutual_fund::MutualFundProvider;
use crate::provider::nps::{bundled_schemes, NpsProvider};
use crate::provider::stock::StockProvider;
use crate::provider::{MarketDataProvider, MetalPriceSource};

/// Routes `search` / `price` calls to the provider registered for the asset
/// class, and metal lookups to the metals source.
pub struct MarketDataService {
    providers: HashMap<AssetClass, Arc<dyn MarketDataProvider>>,
    metals: Arc<dyn MetalPriceSource>,
}

impl MarketDataService {
    /// A service with no searchable providers yet.
    pub fn new(metals: Arc<dyn MetalPriceSource>) -> Self {
        Self {
            providers: HashMap::new(),
            metals,
        }
    }

    /// Register `provider` for its asset class, replacing any previous one.
    pub fn with_provider(mut self, provider: Arc<dyn MarketDataProvider>) -> Self {
        self.providers.insert(provider.asset_class(), provider);
        self
    }

    /// The production wiring: Yahoo, mfapi.in, CoinGecko, npsnav.in with a
    /// file-backed scheme catalog, and the metal rate pages.
    pub fn from_config(config: &MarketDataConfig) -> Result<Self, MarketDataError> {
        let catalog = CatalogCache::new(
            Arc::new(FileCacheStore::new(&config.nps_cache_path)),
            config.nps_cache_ttl,
            bundled_schemes(),
        );

        let metals = MetalsScraper::with_urls(&config.gold_page_url, &config.silver_page_url)?;

        Ok(Self::new(Arc::new(metals))
            .with_provider(Arc::new(StockProvider::new()?))
            .with_provider(Arc::new(MutualFundProvider::new(&config.mf_api_url)?))
            .with_provider(Arc::new(CryptoProvider::new(&config.coingecko_api_url)?))
            .with_provider(Arc::new(NpsProvider::new(&config.nps_api_url, catalog)?)))
    }

    fn provider(&self, asset_class: AssetClass) -> Result<&Arc<dyn MarketDataProvider>, MarketDataError> {
        self.providers
            .get(&asset_class)
            .ok_or_else(|| MarketDataError::UnsupportedAssetClass(asset_class.to_string()))
    }

    /// Instruments of `asset_class` matching `query`.
    pub async fn search(
        &self,
        asset_class: AssetClass,
        query: &str,
    ) -> Result<Vec<Instrument>, MarketDataError> {
        let provider = self.provider(asset_class)?;
        provider.search(query).await.inspect_err(|e| {
            warn!("Search '{}' on '{}' failed: {}", query, provider.id(), e);
        })
    }

    /// Latest price or NAV of `id` within `asset_class`.
    pub async fn price(&self, asset_class: AssetClass, id: &str) -> Result<f64, MarketDataError> {
        let provider = self.provider(asset_class)?;
        provider.get_price(id).await.inspect_err(|e| {
            if e.is_not_found() {
                debug!("No {} price for '{}' from '{}'", asset_class, id, provider.id());
            } else {
                warn!("Price lookup for '{}' on '{}' failed: {}", id, provider.id(), e);
            }
        })
    }

    /// Per-grade prices for `metal`.
    pub async fn metal_prices(&self, metal: Metal) -> Result<MetalPrices, MarketDataError> {
        self.metals.fetch_metal_prices(metal).await.inspect_err(|e| {
            warn!("Fetching {} prices failed: {}", metal, e);
        })
    }
}

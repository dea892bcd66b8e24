//! National Pension System schemes.
//!
//! Search runs over a locally cached scheme catalog ([`CatalogCache`]); the
//! NAV comes from the `npsnav.in` detailed endpoint, field `NAV`.

mod schemes;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use urlencoding::encode;

use crate::cache::{CacheStore, CatalogCache};
use crate::errors::MarketDataError;
use crate::models::{AssetClass, Instrument};
use crate::provider::rest::{build_client, get_json, join_url, number_field, REST_TIMEOUT};
use crate::provider::MarketDataProvider;
use crate::search::search_catalog;
use crate::utils::headers::json_headers;

pub use schemes::bundled_schemes;

/// Provider ID constant
const PROVIDER_ID: &str = "NPS_NAV";

/// Default base URL of the detailed NAV endpoint
pub const DEFAULT_NPS_API_URL: &str = "https://npsnav.in/api/detailed";

const NAV_FIELD: &str = "NAV";

pub struct NpsProvider {
    client: Client,
    api_url: String,
    catalog: CatalogCache,
}

impl NpsProvider {
    pub fn new(api_url: impl Into<String>, catalog: CatalogCache) -> Result<Self, MarketDataError> {
        Ok(Self {
            client: build_client(PROVIDER_ID, json_headers(), REST_TIMEOUT)?,
            api_url: api_url.into(),
            catalog,
        })
    }

    /// Provider whose catalog cache is seeded with the bundled scheme list.
    pub fn with_store(
        api_url: impl Into<String>,
        store: Arc<dyn CacheStore>,
        ttl: std::time::Duration,
    ) -> Result<Self, MarketDataError> {
        Self::new(api_url, CatalogCache::new(store, ttl, bundled_schemes()))
    }
}

#[async_trait]
impl MarketDataProvider for NpsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn asset_class(&self) -> AssetClass {
        AssetClass::Nps
    }

    async fn search(&self, query: &str) -> Result<Vec<Instrument>, MarketDataError> {
        let catalog = self.catalog.get_catalog();
        let matches = search_catalog(query, &catalog);
        debug!("NPS search '{}' matched {} schemes", query, matches.len());

        Ok(matches
            .into_iter()
            .map(|entry| Instrument::new(entry.code, entry.name, AssetClass::Nps))
            .collect())
    }

    async fn get_price(&self, id: &str) -> Result<f64, MarketDataError> {
        let url = join_url(&self.api_url, &encode(id));
        let body: Value = get_json(&self.client, PROVIDER_ID, &url, id).await?;

        match body.get(NAV_FIELD) {
            None | Some(Value::Null) => Err(MarketDataError::NotFound(id.to_string())),
            Some(nav) => number_field(PROVIDER_ID, NAV_FIELD, nav),
        }
    }
}

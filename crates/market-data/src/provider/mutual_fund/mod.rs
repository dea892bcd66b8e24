//! Indian mutual fund schemes via the public `api.mfapi.in` API.
//!
//! - search: `GET /mf/search?q=<query>` -> `[{schemeCode, schemeName}]`
//! - NAV: `GET /mf/<code>/latest` -> `{data: [{date, nav}]}`, `nav` as a string

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{AssetClass, Instrument};
use crate::provider::rest::{build_client, get_json, join_url, number_field, REST_TIMEOUT};
use crate::provider::MarketDataProvider;
use crate::utils::headers::json_headers;

/// Provider ID constant
const PROVIDER_ID: &str = "MFAPI";

pub const DEFAULT_MF_API_URL: &str = "https://api.mfapi.in";

/// mfapi.in sends scheme codes as numbers; accept strings too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SchemeCode {
    Number(u64),
    Text(String),
}

impl fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemeSearchItem {
    scheme_code: SchemeCode,
    scheme_name: String,
}

#[derive(Debug, Deserialize)]
struct LatestNavResponse {
    #[serde(default)]
    data: Vec<NavPoint>,
}

#[derive(Debug, Deserialize)]
struct NavPoint {
    #[serde(default)]
    nav: Value,
}

pub struct MutualFundProvider {
    client: Client,
    api_url: String,
}

impl MutualFundProvider {
    pub fn new(api_url: impl Into<String>) -> Result<Self, MarketDataError> {
        Ok(Self {
            client: build_client(PROVIDER_ID, json_headers(), REST_TIMEOUT)?,
            api_url: api_url.into(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for MutualFundProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn asset_class(&self) -> AssetClass {
        AssetClass::MutualFund
    }

    async fn search(&self, query: &str) -> Result<Vec<Instrument>, MarketDataError> {
        let url = join_url(&self.api_url, &format!("mf/search?q={}", encode(query)));
        let items: Vec<SchemeSearchItem> = get_json(&self.client, PROVIDER_ID, &url, query).await?;

        Ok(items
            .into_iter()
            .map(|item| {
                Instrument::new(
                    item.scheme_code.to_string(),
                    item.scheme_name,
                    AssetClass::MutualFund,
                )
            })
            .collect())
    }

    async fn get_price(&self, id: &str) -> Result<f64, MarketDataError> {
        let url = join_url(&self.api_url, &format!("mf/{}/latest", encode(id)));
        let response: LatestNavResponse = get_json(&self.client, PROVIDER_ID, &url, id).await?;

        let latest = response
            .data
            .first()
            .filter(|point| !point.nav.is_null())
            .ok_or_else(|| MarketDataError::NotFound(id.to_string()))?;

        number_field(PROVIDER_ID, "nav", &latest.nav)
    }
}

//! Cryptocurrencies via the public CoinGecko API.
//!
//! Prices are quoted in USD. Coin ids are CoinGecko ids (`bitcoin`,
//! `ethereum`), not ticker symbols.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{AssetClass, Instrument};
use crate::provider::rest::{build_client, get_json, join_url, REST_TIMEOUT};
use crate::provider::MarketDataProvider;
use crate::utils::headers::json_headers;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

pub const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Quote currency for every crypto price
pub const CRYPTO_QUOTE_CURRENCY: &str = "usd";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    coins: Vec<CoinItem>,
}

#[derive(Debug, Deserialize)]
struct CoinItem {
    id: String,
    name: String,
    #[serde(default)]
    symbol: String,
}

/// `{"bitcoin": {"usd": 67000.0}}`
type SimplePriceResponse = HashMap<String, HashMap<String, Option<f64>>>;

pub struct CryptoProvider {
    client: Client,
    api_url: String,
}

impl CryptoProvider {
    pub fn new(api_url: impl Into<String>) -> Result<Self, MarketDataError> {
        Ok(Self {
            client: build_client(PROVIDER_ID, json_headers(), REST_TIMEOUT)?,
            api_url: api_url.into(),
        })
    }
}

fn display_name(coin: &CoinItem) -> String {
    if coin.symbol.is_empty() {
        coin.name.clone()
    } else {
        format!("{} ({})", coin.name, coin.symbol.to_uppercase())
    }
}

#[async_trait]
impl MarketDataProvider for CryptoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn asset_class(&self) -> AssetClass {
        AssetClass::Crypto
    }

    async fn search(&self, query: &str) -> Result<Vec<Instrument>, MarketDataError> {
        let url = join_url(&self.api_url, &format!("search?query={}", encode(query)));
        let response: SearchResponse = get_json(&self.client, PROVIDER_ID, &url, query).await?;

        Ok(response
            .coins
            .iter()
            .map(|coin| Instrument::new(coin.id.clone(), display_name(coin), AssetClass::Crypto))
            .collect())
    }

    async fn get_price(&self, id: &str) -> Result<f64, MarketDataError> {
        let url = join_url(
            &self.api_url,
            &format!(
                "simple/price?ids={}&vs_currencies={}",
                encode(id),
                CRYPTO_QUOTE_CURRENCY
            ),
        );
        let prices: SimplePriceResponse = get_json(&self.client, PROVIDER_ID, &url, id).await?;

        prices
            .get(id)
            .and_then(|quotes| quotes.get(CRYPTO_QUOTE_CURRENCY).copied().flatten())
            .ok_or_else(|| MarketDataError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::rest::test_support::serve;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};

    async fn fake_coingecko() -> String {
        serve(
            Router::new()
                .route(
                    "/search",
                    get(|Query(params): Query<HashMap<String, String>>| async move {
                        let coins = if params.get("query").map(String::as_str) == Some("eth") {
                            json!([
                                {"id": "ethereum", "name": "Ethereum", "symbol": "ETH", "market_cap_rank": 2},
                                {"id": "ethereum-classic", "name": "Ethereum Classic", "symbol": "ETC"}
                            ])
                        } else {
                            json!([])
                        };
                        Json(json!({"coins": coins, "exchanges": [], "nfts": []}))
                    }),
                )
                .route(
                    "/simple/price",
                    get(|Query(params): Query<HashMap<String, String>>| async move {
                        if params.get("vs_currencies").map(String::as_str) != Some("usd") {
                            return Err(StatusCode::BAD_REQUEST);
                        }
                        let body: Value = match params.get("ids").map(String::as_str) {
                            Some("bitcoin") => json!({"bitcoin": {"usd": 67012.5}}),
                            Some("delisted") => json!({"delisted": {}}),
                            _ => json!({}),
                        };
                        Ok(Json(body))
                    }),
                ),
        )
        .await
    }

    #[tokio::test]
    async fn test_search_uses_coin_ids() {
        let provider = CryptoProvider::new(fake_coingecko().await).unwrap();

        let results = provider.search("eth").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].code, "ethereum");
        assert_eq!(results[0].name, "Ethereum (ETH)");

        assert!(provider.search("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_price_in_usd() {
        let provider = CryptoProvider::new(fake_coingecko().await).unwrap();
        assert_eq!(provider.get_price("bitcoin").await.unwrap(), 67012.5);
    }

    #[tokio::test]
    async fn test_unknown_or_unpriced_coin_is_not_found() {
        let provider = CryptoProvider::new(fake_coingecko().await).unwrap();
        assert!(provider.get_price("not-a-coin").await.unwrap_err().is_not_found());
        assert!(provider.get_price("delisted").await.unwrap_err().is_not_found());
    }
}

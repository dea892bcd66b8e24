//! Listed equities through Yahoo Finance.
//!
//! Symbols are Yahoo tickers, so Indian listings carry the exchange suffix
//! (`RELIANCE.NS`, `TCS.BO`). The connector does its own HTTP, so calls are
//! wrapped in [`REST_TIMEOUT`] here instead of on a `reqwest` client.

use std::future::Future;

use async_trait::async_trait;
use tracing::warn;
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{AssetClass, Instrument};
use crate::provider::{MarketDataProvider, REST_TIMEOUT};

/// Provider ID constant
const PROVIDER_ID: &str = "YAHOO";

pub struct StockProvider {
    connector: yahoo::YahooConnector,
}

impl StockProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| {
            MarketDataError::upstream(
                PROVIDER_ID,
                format!("Failed to initialize Yahoo connector: {}", e),
            )
        })?;
        Ok(Self { connector })
    }
}

/// Map a connector failure for `symbol`. Yahoo answers unknown tickers with
/// an empty result rather than a 404.
fn map_yahoo_error(symbol: &str, err: yahoo::YahooError) -> MarketDataError {
    if matches!(err, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
        MarketDataError::NotFound(symbol.to_string())
    } else {
        MarketDataError::upstream(PROVIDER_ID, err.to_string())
    }
}

async fn with_timeout<T>(
    call: impl Future<Output = Result<T, yahoo::YahooError>>,
    symbol: &str,
) -> Result<T, MarketDataError> {
    match tokio::time::timeout(REST_TIMEOUT, call).await {
        Ok(result) => result.map_err(|e| map_yahoo_error(symbol, e)),
        Err(_) => Err(MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        }),
    }
}

fn display_name(long_name: &str, short_name: &str, symbol: &str) -> String {
    [long_name, short_name]
        .into_iter()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or(symbol)
        .to_string()
}

#[async_trait]
impl MarketDataProvider for StockProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn asset_class(&self) -> AssetClass {
        AssetClass::Stock
    }

    async fn search(&self, query: &str) -> Result<Vec<Instrument>, MarketDataError> {
        let encoded = encode(query);
        let result = match with_timeout(self.connector.search_ticker(&encoded), query).await {
            Ok(result) => result,
            // Nothing matched
            Err(MarketDataError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Ok(result
            .quotes
            .iter()
            .map(|item| {
                Instrument::new(
                    item.symbol.clone(),
                    display_name(&item.long_name, &item.short_name, &item.symbol),
                    AssetClass::Stock,
                )
            })
            .collect())
    }

    async fn get_price(&self, symbol: &str) -> Result<f64, MarketDataError> {
        let response = with_timeout(self.connector.get_latest_quotes(symbol, "1d"), symbol).await?;

        let quote = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", symbol, e);
            MarketDataError::NotFound(symbol.to_string())
        })?;

        if quote.close.is_finite() {
            Ok(quote.close)
        } else {
            Err(MarketDataError::parse(
                PROVIDER_ID,
                format!("non-finite close for {}", symbol),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_not_found() {
        let err = map_yahoo_error("NOPE.NS", yahoo::YahooError::NoQuotes);
        assert!(matches!(err, MarketDataError::NotFound(s) if s == "NOPE.NS"));

        let err = map_yahoo_error("NOPE.NS", yahoo::YahooError::NoResult);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_failures_are_upstream() {
        let err = map_yahoo_error("TCS.NS", yahoo::YahooError::DataInconsistency);
        assert!(matches!(err, MarketDataError::Upstream { provider, .. } if provider == "YAHOO"));
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(
            display_name("Reliance Industries Limited", "RELIANCE INDS", "RELIANCE.NS"),
            "Reliance Industries Limited"
        );
        assert_eq!(display_name("", "RELIANCE INDS", "RELIANCE.NS"), "RELIANCE INDS");
        assert_eq!(display_name(" ", "", "RELIANCE.NS"), "RELIANCE.NS");
    }

    #[tokio::test]
    #[ignore = "requires network access to Yahoo Finance"]
    async fn test_live_price() {
        let provider = StockProvider::new().unwrap();
        let price = provider.get_price("RELIANCE.NS").await.unwrap();
        assert!(price > 0.0);
    }

    #[tokio::test]
    #[ignore = "requires network access to Yahoo Finance"]
    async fn test_live_search() {
        let provider = StockProvider::new().unwrap();
        let results = provider.search("Infosys").await.unwrap();
        assert!(results.iter().any(|i| i.code.starts_with("INFY")));
    }
}

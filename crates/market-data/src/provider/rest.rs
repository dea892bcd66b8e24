//! Shared request plumbing: one GET, status classification, body decoding.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::MarketDataError;

/// Timeout for REST price/NAV and search lookups
pub const REST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn build_client(
    provider: &str,
    headers: HeaderMap,
    timeout: Duration,
) -> Result<Client, MarketDataError> {
    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| MarketDataError::upstream(provider, format!("Failed to create HTTP client: {}", e)))
}

/// `base` + `/` + `path`, without doubling the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn send(
    client: &Client,
    provider: &str,
    url: &str,
    id: &str,
) -> Result<reqwest::Response, MarketDataError> {
    debug!("{} GET {}", provider, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(MarketDataError::NotFound(id.to_string()));
    }
    if !status.is_success() {
        return Err(MarketDataError::upstream(
            provider,
            format!("request failed: {}", status),
        ));
    }

    Ok(response)
}

/// GET `url` and decode the body as `T`. A 404 is reported as not-found for `id`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &str,
    url: &str,
    id: &str,
) -> Result<T, MarketDataError> {
    let body = send(client, provider, url, id)
        .await?
        .bytes()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))?;

    serde_json::from_slice(&body).map_err(|e| MarketDataError::parse(provider, e.to_string()))
}

/// GET `url` and return the body as text.
pub(crate) async fn get_text(
    client: &Client,
    provider: &str,
    url: &str,
    id: &str,
) -> Result<String, MarketDataError> {
    send(client, provider, url, id)
        .await?
        .text()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))
}

/// Read a price that upstreams send either as a JSON number or a numeric string.
pub(crate) fn number_field(provider: &str, field: &str, value: &Value) -> Result<f64, MarketDataError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| MarketDataError::parse(provider, format!("field `{}` is not a number: {}", field, value)))
}

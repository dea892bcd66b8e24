use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use marketgate_market_data::MarketDataConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub market_data: MarketDataConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source. Unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = lookup("MG_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8010".to_string())
            .parse()
            .context("Invalid MG_LISTEN_ADDR")?;
        let cors_allow = lookup("MG_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("MG_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(60000);

        let defaults = MarketDataConfig::default();
        let nps_cache_ttl = lookup("MG_NPS_CACHE_TTL_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.nps_cache_ttl);
        let market_data = MarketDataConfig {
            mf_api_url: lookup("MG_MF_API_URL").unwrap_or(defaults.mf_api_url),
            coingecko_api_url: lookup("MG_COINGECKO_API_URL")
                .unwrap_or(defaults.coingecko_api_url),
            nps_api_url: lookup("MG_NPS_API_URL").unwrap_or(defaults.nps_api_url),
            gold_page_url: lookup("MG_GOLD_PAGE_URL").unwrap_or(defaults.gold_page_url),
            silver_page_url: lookup("MG_SILVER_PAGE_URL").unwrap_or(defaults.silver_page_url),
            nps_cache_path: lookup("MG_NPS_CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.nps_cache_path),
            nps_cache_ttl,
        };

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            market_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8010".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_allow, vec!["*"]);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.market_data.nps_cache_path, PathBuf::from("./data/nps_data.json"));
        assert_eq!(config.market_data.nps_cache_ttl, Duration::from_secs(86400));
        assert_eq!(config.market_data.mf_api_url, "https://api.mfapi.in");
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("MG_LISTEN_ADDR", "127.0.0.1:9000"),
            ("MG_CORS_ALLOW_ORIGINS", "http://localhost:5173, http://localhost:3000,"),
            ("MG_NPS_CACHE_TTL_SECS", "60"),
            ("MG_GOLD_PAGE_URL", "http://127.0.0.1:1/gold"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(
            config.cors_allow,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
        assert_eq!(config.market_data.nps_cache_ttl, Duration::from_secs(60));
        assert_eq!(config.market_data.gold_page_url, "http://127.0.0.1:1/gold");
    }

    #[test]
    fn invalid_listen_addr_is_an_error() {
        assert!(config_from(&[("MG_LISTEN_ADDR", "not-an-addr")]).is_err());
    }
}

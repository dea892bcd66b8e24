use std::sync::Arc;

use crate::config::Config;
use marketgate_market_data::MarketDataService;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub market_data: Arc<MarketDataService>,
}

impl AppState {
    pub fn new(market_data: MarketDataService) -> Arc<Self> {
        Arc::new(Self {
            market_data: Arc::new(market_data),
        })
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("MG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!(
        "NPS scheme catalog at {} (ttl {}s)",
        config.market_data.nps_cache_path.display(),
        config.market_data.nps_cache_ttl.as_secs()
    );
    let market_data = MarketDataService::from_config(&config.market_data)?;
    Ok(AppState::new(market_data))
}

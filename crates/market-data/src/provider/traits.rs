//! Provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{AssetClass, Instrument, Metal, MetalPrices};

/// Search and latest price for one asset class.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use marketgate_market_data::provider::MarketDataProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     fn asset_class(&self) -> AssetClass {
///         AssetClass::Stock
///     }
///
///     // ... implement search and get_price
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier used in logs and error messages (e.g. "NPS_NAV").
    fn id(&self) -> &'static str;

    /// The asset class this provider answers for.
    fn asset_class(&self) -> AssetClass;

    /// Instruments whose name or code matches `query`.
    ///
    /// No match is an empty vector, not an error.
    async fn search(&self, query: &str) -> Result<Vec<Instrument>, MarketDataError>;

    /// Latest price or NAV for `id`.
    ///
    /// Returns [`MarketDataError::NotFound`] when the upstream has no value for it.
    async fn get_price(&self, id: &str) -> Result<f64, MarketDataError>;
}

/// Per-grade prices for a precious metal, read from a page with no API.
#[async_trait]
pub trait MetalPriceSource: Send + Sync {
    async fn fetch_metal_prices(&self, metal: Metal) -> Result<MetalPrices, MarketDataError>;
}

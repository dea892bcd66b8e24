//! Precious metal rates scraped from public rate pages.
//!
//! There is no API for these, so each call downloads the whole page with a
//! browser identity and reads fixed cells described by a [`MetalPageLayout`].
//! A network failure fails the whole call. A cell that does not resolve only
//! nulls that one field, unless its grade is marked required.

mod layout;

use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{Metal, MetalPrices, MetalQuote};
use crate::provider::rest::{build_client, get_text};
use crate::provider::MetalPriceSource;
use crate::scrape::{clean_number, CellLocator};
use crate::utils::headers::page_headers;

pub use layout::{
    GradeLayout, MetalPageLayout, DEFAULT_GOLD_PAGE_URL, DEFAULT_SILVER_PAGE_URL,
    METAL_QUOTE_CURRENCY,
};

/// Provider ID constant
const PROVIDER_ID: &str = "METALS";

/// Timeout for one page download
pub const SCRAPE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct MetalsScraper {
    client: Client,
    gold: MetalPageLayout,
    silver: MetalPageLayout,
}

impl MetalsScraper {
    pub fn new(gold: MetalPageLayout, silver: MetalPageLayout) -> Result<Self, MarketDataError> {
        Ok(Self {
            client: build_client(PROVIDER_ID, page_headers(), SCRAPE_TIMEOUT)?,
            gold,
            silver,
        })
    }

    /// Scraper using the production page coordinates at the given URLs.
    pub fn with_urls(
        gold_url: impl Into<String>,
        silver_url: impl Into<String>,
    ) -> Result<Self, MarketDataError> {
        Self::new(
            MetalPageLayout::gold(gold_url)?,
            MetalPageLayout::silver(silver_url)?,
        )
    }

    fn layout(&self, metal: Metal) -> &MetalPageLayout {
        match metal {
            Metal::Gold => &self.gold,
            Metal::Silver => &self.silver,
        }
    }
}

fn read_cell(document: &Html, locator: &CellLocator) -> Option<f64> {
    let value = clean_number(locator.text(document).as_deref());
    if value.is_none() {
        debug!("Cell {} did not resolve to a number", locator);
    }
    value
}

/// Read every grade of `layout` out of an already downloaded page.
///
/// Grades are always present in the result; unresolved cells are `None`.
pub fn parse_metal_page(html: &str, layout: &MetalPageLayout) -> MetalPrices {
    let document = Html::parse_document(html);

    layout
        .grades
        .iter()
        .map(|grade| {
            let quote = MetalQuote {
                today: read_cell(&document, &grade.today),
                yesterday: grade
                    .yesterday
                    .as_ref()
                    .map(|locator| read_cell(&document, locator)),
                change: grade
                    .change
                    .as_ref()
                    .map(|locator| read_cell(&document, locator)),
                currency: layout.currency.clone(),
            };
            (grade.label.clone(), quote)
        })
        .collect()
}

#[async_trait]
impl MetalPriceSource for MetalsScraper {
    async fn fetch_metal_prices(&self, metal: Metal) -> Result<MetalPrices, MarketDataError> {
        let layout = self.layout(metal);
        let html = get_text(&self.client, PROVIDER_ID, &layout.url, metal.as_str()).await?;

        let prices = parse_metal_page(&html, layout);

        let missing_required = layout
            .grades
            .iter()
            .filter(|grade| grade.required)
            .any(|grade| prices.get(&grade.label).map_or(true, |q| q.today.is_none()));
        if missing_required {
            warn!("No {} rate could be read from {}", metal, layout.url);
            return Err(MarketDataError::NotFound(metal.to_string()));
        }

        if prices.values().all(MetalQuote::is_empty) {
            warn!(
                "No {} cell resolved on {}; page layout may have changed",
                metal, layout.url
            );
        }

        Ok(prices)
    }
}

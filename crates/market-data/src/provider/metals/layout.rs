//! Where each grade's cells live on a metal rate page.

use crate::errors::MarketDataError;
use crate::scrape::CellLocator;

pub const DEFAULT_GOLD_PAGE_URL: &str = "https://www.goodreturns.in/gold-rates/";
pub const DEFAULT_SILVER_PAGE_URL: &str = "https://www.goodreturns.in/silver-rates/";

/// Currency the rate pages quote in.
pub const METAL_QUOTE_CURRENCY: &str = "INR";

/// First row of the n-th rate table on the page.
fn rate_cell(section: usize, column: usize) -> String {
    format!(
        "/html/body/div[1]/div[2]/div[1]/section[{}]/table/tbody/tr[1]/td[{}]",
        section, column
    )
}

/// Locators for one grade. `yesterday` and `change` are optional because not
/// every page publishes them.
#[derive(Clone, Debug)]
pub struct GradeLayout {
    pub label: String,
    pub today: CellLocator,
    pub yesterday: Option<CellLocator>,
    pub change: Option<CellLocator>,
    /// An unresolved `today` fails the whole lookup instead of yielding a null.
    pub required: bool,
}

impl GradeLayout {
    pub fn today_only(label: impl Into<String>, today: &str) -> Result<Self, MarketDataError> {
        Ok(Self {
            label: label.into(),
            today: CellLocator::parse(today)?,
            yesterday: None,
            change: None,
            required: false,
        })
    }

    pub fn full(
        label: impl Into<String>,
        today: &str,
        yesterday: &str,
        change: &str,
    ) -> Result<Self, MarketDataError> {
        Ok(Self {
            label: label.into(),
            today: CellLocator::parse(today)?,
            yesterday: Some(CellLocator::parse(yesterday)?),
            change: Some(CellLocator::parse(change)?),
            required: false,
        })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// One page and the grades read from it.
#[derive(Clone, Debug)]
pub struct MetalPageLayout {
    pub url: String,
    pub currency: String,
    pub grades: Vec<GradeLayout>,
}

impl MetalPageLayout {
    /// 24K, 22K and 18K tables, each with today / yesterday / change columns.
    pub fn gold(url: impl Into<String>) -> Result<Self, MarketDataError> {
        let grades = [("24K", 4), ("22K", 5), ("18K", 6)]
            .into_iter()
            .map(|(label, section)| {
                GradeLayout::full(
                    label,
                    &rate_cell(section, 2),
                    &rate_cell(section, 3),
                    &rate_cell(section, 4),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            url: url.into(),
            currency: METAL_QUOTE_CURRENCY.to_string(),
            grades,
        })
    }

    /// Per-gram silver, today's rate only. Without that rate there is nothing
    /// to report, so the grade is required.
    pub fn silver(url: impl Into<String>) -> Result<Self, MarketDataError> {
        Ok(Self {
            url: url.into(),
            currency: METAL_QUOTE_CURRENCY.to_string(),
            grades: vec![GradeLayout::today_only("1 G", &rate_cell(5, 2))?.required()],
        })
    }
}

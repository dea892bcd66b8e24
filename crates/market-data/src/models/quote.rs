use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Precious metals with a scraped price page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Gold,
    Silver,
}

impl Metal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price record for one grade of a metal (e.g. "24K" gold, "1 G" silver).
///
/// `None` in `today` means the cell did not resolve. For `yesterday` and
/// `change` the outer `Option` tells whether the page layout tracks the field
/// at all; untracked fields are omitted from the JSON, tracked but unresolved
/// ones serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetalQuote {
    pub today: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yesterday: Option<Option<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<Option<f64>>,

    /// Quote currency
    pub currency: String,
}

impl MetalQuote {
    /// Returns true if no tracked cell produced a value.
    pub fn is_empty(&self) -> bool {
        self.today.is_none() && self.yesterday.flatten().is_none() && self.change.flatten().is_none()
    }
}

/// Grade label -> quote.
pub type MetalPrices = BTreeMap<String, MetalQuote>;

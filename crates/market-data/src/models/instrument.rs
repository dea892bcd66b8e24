use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Asset classification served by the gateway.
///
/// The serialized form doubles as the route segment (`/search/{asset}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stock,
    #[serde(rename = "mf")]
    MutualFund,
    Crypto,
    Nps,
    Metal,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::MutualFund => "mf",
            Self::Crypto => "crypto",
            Self::Nps => "nps",
            Self::Metal => "metal",
        }
    }

    /// Whether the class has a searchable catalog.
    ///
    /// Metals are addressed by a fixed route per metal and are never searched.
    pub fn is_searchable(&self) -> bool {
        !matches!(self, Self::Metal)
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stock" => Ok(Self::Stock),
            "mf" => Ok(Self::MutualFund),
            "crypto" => Ok(Self::Crypto),
            "nps" => Ok(Self::Nps),
            "metal" => Ok(Self::Metal),
            other => Err(format!("Unknown asset class: {}", other)),
        }
    }
}

/// A searchable instrument.
///
/// `code` is unique within its asset class: a ticker for stocks, a scheme
/// code for mutual funds and NPS schemes, a coin id for crypto.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub code: String,
    pub name: String,
    pub asset_class: AssetClass,
}

impl Instrument {
    pub fn new(code: impl Into<String>, name: impl Into<String>, asset_class: AssetClass) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            asset_class,
        }
    }
}

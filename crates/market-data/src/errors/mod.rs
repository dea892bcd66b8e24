//! Error types for the market data crate.
//!
//! Providers report every failure through [`MarketDataError`]. The variants
//! keep "the id does not exist" apart from "the upstream is down" and "the
//! upstream answered with something we could not read", so the gateway can
//! pick a status code for each instead of collapsing them all to not-found.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The upstream has no data for the requested id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure or non-2xx response from an upstream.
    #[error("Upstream error: {provider} - {message}")]
    Upstream {
        /// The provider that failed
        provider: String,
        /// The error message
        message: String,
    },

    /// The upstream did not answer within the fixed per-call timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The upstream answered but the body could not be read: malformed JSON,
    /// missing field, unresolved page layout, unparseable number.
    #[error("Parse error: {provider} - {message}")]
    Parse {
        /// The provider whose response failed to parse
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// A structural path or CSS selector could not be compiled.
    #[error("Invalid locator '{locator}': {message}")]
    InvalidLocator {
        /// The locator source text
        locator: String,
        /// Why it was rejected
        message: String,
    },

    /// Reading or writing the persisted catalog snapshot failed.
    #[error("Cache error: {0}")]
    Cache(String),

    /// No provider is registered for the asset class.
    #[error("Unsupported asset class: {0}")]
    UnsupportedAssetClass(String),
}

impl MarketDataError {
    /// Classify a `reqwest` failure for the given provider.
    pub fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if err.is_decode() {
            Self::Parse {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        } else {
            Self::Upstream {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }

    pub fn parse(provider: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub fn upstream(provider: &str, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<std::io::Error> for MarketDataError {
    fn from(err: std::io::Error) -> Self {
        Self::Cache(err.to_string())
    }
}

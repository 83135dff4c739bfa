//! Error types for the gold price pipeline.

use thiserror::Error;

/// Everything that can go wrong between issuing the first request and
/// producing a converted price.
#[derive(Error, Debug)]
pub enum GoldError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("wrong currency: '{code}' rejected by rate endpoint (HTTP {status})")]
    InvalidCurrency { code: String, status: u16 },

    #[error("unexpected HTTP {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },

    #[error("wrong unit: '{unit}'; expected one of: g, kg, lbs, oz")]
    InvalidUnit { unit: String },

    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl GoldError {
    pub(crate) fn decode(what: &'static str, reason: impl ToString) -> Self {
        Self::Decode {
            what,
            reason: reason.to_string(),
        }
    }
}

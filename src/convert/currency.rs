use crate::args::DEFAULT_CURRENCY;
use crate::decode::decode_rate;
use crate::error::GoldError;
use crate::source::GoldSource;
use std::fmt::{Display, Formatter};
use tracing::info;

/// Currency code as passed to the rate endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency(String);

impl Currency {
    pub(crate) fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl From<&str> for Currency {
    fn from(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            Self::default()
        } else {
            Self(token.to_string())
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Expresses a PLN value in the currency named by `token`.
///
/// Every call asks `source` for a fresh rate.
pub(crate) async fn convert_currency<S>(
    source: &S,
    value: f64,
    token: &str,
) -> Result<f64, GoldError>
where
    S: GoldSource + ?Sized,
{
    let currency = Currency::from(token);

    let raw = source.fetch_rate(currency.code()).await?;
    let rate = decode_rate(&raw)?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(GoldError::decode(
            "exchange rate",
            format!("mid rate for '{currency}' must be positive, got {rate}"),
        ));
    }

    info!(currency = %currency, rate, "using mid rate");
    Ok(value / rate)
}

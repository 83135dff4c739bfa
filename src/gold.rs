//! The `gold` command: price fetch, unit conversion, currency conversion.

use crate::config::GoldConfig;
use crate::convert::{convert_currency, Currency, MassUnit};
use crate::decode::decode_price;
use crate::error::GoldError;
use crate::source::{GoldSource, NbpClient};
use crate::ui::spinner::with_spinner;
use anyhow::{Context, Result};
use std::fmt::{Display, Formatter};
use tracing::{debug, info};

/// Converted gold price, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GoldQuote {
    pub(crate) price: f64,
    pub(crate) currency: Currency,
    pub(crate) unit: MassUnit,
}

impl Display for GoldQuote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Current gold price: {:.2} {} per {}",
            self.price, self.currency, self.unit
        )
    }
}

/// Runs the price pipeline against `source`.
///
/// Exactly one price request and one rate request are made, in that order.
pub(crate) async fn quote<S>(
    source: &S,
    unit: MassUnit,
    currency: &Currency,
) -> Result<GoldQuote, GoldError>
where
    S: GoldSource + ?Sized,
{
    let raw = source.fetch_price().await?;
    let per_gram = decode_price(&raw)?;
    info!(per_gram, "gold price in PLN per gram");

    let per_unit = unit.convert(per_gram);
    let price = convert_currency(source, per_unit, currency.code()).await?;

    Ok(GoldQuote {
        price,
        currency: currency.clone(),
        unit,
    })
}

pub(crate) async fn run_gold(config: &GoldConfig) -> Result<()> {
    let client = NbpClient::new(config.api_url.clone(), config.timeout)
        .context("Failed to set up NBP client")?;

    let quote = with_spinner(
        "Fetching gold price…",
        quote(&client, config.unit, &config.currency),
    )
    .await
    .inspect_err(|e| debug!("pipeline failed: {e:?}"))
    .context("Failed to get the current gold price")?;

    println!("{quote}");

    Ok(())
}

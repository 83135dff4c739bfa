use crate::args::GoldArgs;
use crate::config::load_api_url::load_api_url;
use crate::convert::{Currency, MassUnit};
use anyhow::{Context, Result};
use derive_builder::Builder;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

mod load_api_url;

/// Settings for a single `gold` run, validated before any request goes out.
#[derive(Builder, Clone, Debug)]
pub struct GoldConfig {
    /// Base URL of the NBP API
    pub(crate) api_url: Url,
    /// Per-request timeout; `None` keeps the HTTP client default
    #[builder(default)]
    pub(crate) timeout: Option<Duration>,
    /// Mass unit the price is quoted per
    #[builder(default)]
    pub(crate) unit: MassUnit,
    /// Currency the price is quoted in
    #[builder(default)]
    pub(crate) currency: Currency,
}

impl GoldConfig {
    pub fn builder() -> GoldConfigBuilder {
        GoldConfigBuilder::default()
    }

    pub(crate) fn setup(args: GoldArgs) -> Result<GoldConfig> {
        let unit: MassUnit = args.unit.parse().context("Failed to load unit")?;
        let currency = Currency::from(args.cur.as_str());
        let api_url = load_api_url(&args.api_url).context("Failed to load API URL")?;

        let config = Self::builder()
            .api_url(api_url)
            .timeout(args.timeout)
            .unit(unit)
            .currency(currency)
            .build()
            .context("Failed to build gold config")?;

        debug!(?config, "configuration complete");

        Ok(config)
    }
}

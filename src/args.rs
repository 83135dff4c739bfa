use clap::ValueHint;
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

pub const DEFAULT_UNIT: &str = "oz";
pub const DEFAULT_CURRENCY: &str = "usd";
pub const DEFAULT_API_URL: &str = "http://api.nbp.pl";

/// Read before argument parsing so the file can supply the `KOKO_*` fallbacks.
pub const ENV_FILE_ENV_VAR: &str = "KOKO_ENV_FILE";

/// koko - shows the current gold prices in several currencies and units
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Shows current price of gold
    Gold(GoldArgs),
}

#[derive(Args, Debug)]
pub(crate) struct GoldArgs {
    /// Mass unit to quote the price per (g | kg | lbs | oz)
    #[arg(long, env = "KOKO_UNIT", value_name = "name", default_value = DEFAULT_UNIT)]
    pub(crate) unit: String,

    /// Currency code to quote the price in, as accepted by the NBP rate table A
    #[arg(long, env = "KOKO_CURRENCY", value_name = "name", default_value = DEFAULT_CURRENCY)]
    pub(crate) cur: String,

    /// Base URL of the NBP API
    #[arg(
        long,
        env = "KOKO_API_URL",
        value_hint = ValueHint::Url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: String,

    /// Per-request timeout in seconds (default: none)
    #[arg(
        long = "timeout",
        env = "KOKO_HTTP_TIMEOUT",
        value_name = "secs",
        value_parser = parse_timeout
    )]
    pub(crate) timeout: Option<Duration>,
}

pub fn parse_timeout(s: &str) -> Result<Duration, String> {
    match s.trim().parse::<u64>() {
        Ok(0) => Err("timeout must be at least 1 second".to_string()),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(format!(
            "invalid KOKO_HTTP_TIMEOUT '{}'; expected a whole number of seconds",
            s
        )),
    }
}

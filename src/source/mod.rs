pub(crate) mod nbp;

pub(crate) use nbp::NbpClient;

use crate::error::GoldError;
use async_trait::async_trait;

/// Upstream that publishes the gold price and exchange rates.
///
/// Implementations return the raw response body; decoding lives in
/// [`crate::decode`].
#[async_trait]
pub(crate) trait GoldSource: Send + Sync {
    /// Current gold price list, PLN per gram.
    async fn fetch_price(&self) -> Result<Vec<u8>, GoldError>;

    /// Mid exchange rate table entry for `code`.
    ///
    /// A rejected code is reported as [`GoldError::InvalidCurrency`].
    async fn fetch_rate(&self, code: &str) -> Result<Vec<u8>, GoldError>;
}

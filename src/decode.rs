//! Decoders for the two NBP response shapes.

use crate::error::GoldError;
use serde::Deserialize;
use tracing::debug;

/// One entry of `/api/cenyzlota`: `{"data": "2024-01-01", "cena": 123.45}`.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    #[serde(rename = "data")]
    date: Option<String>,
    #[serde(rename = "cena")]
    price: f64,
}

/// Body of `/api/exchangerates/rates/a/{code}`.
#[derive(Debug, Deserialize)]
struct RateTable {
    table: Option<String>,
    currency: Option<String>,
    code: Option<String>,
    rates: Vec<Rate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Rate {
    no: Option<String>,
    effective_date: Option<String>,
    mid: f64,
}

/// Gold price (PLN per gram) from the first record of the price list.
pub(crate) fn decode_price(raw: &[u8]) -> Result<f64, GoldError> {
    let records: Vec<PriceRecord> =
        serde_json::from_slice(raw).map_err(|e| GoldError::decode("gold price", e))?;

    let first = records
        .into_iter()
        .next()
        .ok_or_else(|| GoldError::decode("gold price", "empty price list"))?;

    debug!(date = ?first.date, price = first.price, "decoded gold price");
    Ok(first.price)
}

/// Mid exchange rate (PLN per unit of currency) from the first rate entry.
pub(crate) fn decode_rate(raw: &[u8]) -> Result<f64, GoldError> {
    let table: RateTable =
        serde_json::from_slice(raw).map_err(|e| GoldError::decode("exchange rate", e))?;

    let RateTable {
        table: table_name,
        currency,
        code,
        rates,
    } = table;

    let first = rates
        .into_iter()
        .next()
        .ok_or_else(|| GoldError::decode("exchange rate", "empty rates sequence"))?;

    debug!(
        table = ?table_name,
        currency = ?currency,
        code = ?code,
        no = ?first.no,
        effective_date = ?first.effective_date,
        mid = first.mid,
        "decoded exchange rate"
    );
    Ok(first.mid)
}

mod currency;
mod unit;

pub(crate) use currency::{convert_currency, Currency};
pub(crate) use unit::MassUnit;

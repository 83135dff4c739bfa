use crate::error::GoldError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Mass unit the gold price is quoted per.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MassUnit {
    Gram,
    Kilogram,
    Pound,
    /// Avoirdupois ounce, not the troy ounce.
    #[default]
    Ounce,
}

impl MassUnit {
    /// Grams in one unit.
    pub(crate) fn factor(self) -> f64 {
        match self {
            Self::Gram => 1.0,
            Self::Kilogram => 1000.0,
            Self::Pound => 453.59,
            Self::Ounce => 28.35,
        }
    }

    /// Turns a per-gram price into a per-unit price.
    pub(crate) fn convert(self, per_gram: f64) -> f64 {
        per_gram * self.factor()
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Pound => "lbs",
            Self::Ounce => "oz",
        }
    }
}

impl FromStr for MassUnit {
    type Err = GoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "kg" => Ok(Self::Kilogram),
            "g" => Ok(Self::Gram),
            "lbs" => Ok(Self::Pound),
            "" | "oz" => Ok(Self::Ounce),
            _ => Err(GoldError::InvalidUnit {
                unit: s.to_string(),
            }),
        }
    }
}

impl Display for MassUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

//! Display formats for range bounds

use iso_currency::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the bounds of a range filter are shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Compact amount in millions, prefixed with the currency symbol (e.g. "R$ 1.5M")
    Currency(Currency),
    #[default]
    Number,
    Percentage,
}

impl ValueFormat {
    pub fn format(&self, value: Decimal) -> String {
        match self {
            ValueFormat::Currency(currency) => {
                let millions = value / Decimal::from(1_000_000);
                format!("{} {:.1}M", currency.symbol(), millions)
            }
            ValueFormat::Number => value.normalize().to_string(),
            ValueFormat::Percentage => format!("{}%", value.normalize()),
        }
    }
}

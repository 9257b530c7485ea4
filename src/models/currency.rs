//! Currency labels
//!
//! The currency is a display label only. Amounts are never converted between
//! currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AffordError;

/// Supported currency labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Saudi riyal
    #[default]
    Sar,
    /// US dollar
    Usd,
    /// Euro
    Eur,
    /// UAE dirham
    Aed,
}

impl Currency {
    /// All supported currencies, in display order
    pub const ALL: [Currency; 4] = [Currency::Sar, Currency::Usd, Currency::Eur, Currency::Aed];

    /// ISO 4217 code
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Sar => "SAR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Aed => "AED",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = AffordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| AffordError::unknown_currency(code))
    }
}

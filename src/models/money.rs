//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths of the currency unit (i64) so that
//! sums and differences of entered amounts are exact. Ratios against salary
//! are the only place floating point appears.
//!
//! Parsed and deserialized amounts are limited to [`Money::MAX_UNITS`] in
//! either direction. Within that range every derived figure fits in an i64
//! with room to spare; arithmetic saturates rather than wrapping for amounts
//! built directly from raw cents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Represents a monetary amount stored as hundredths of the currency unit
///
/// The currency itself is carried separately (see [`super::Currency`]); an
/// amount is just a signed number of minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest accepted input magnitude, in whole currency units
    pub const MAX_UNITS: i64 = 1_000_000_000_000;

    const MAX_CENTS: i64 = Self::MAX_UNITS * 100;

    /// Create a Money amount from minor units (hundredths)
    ///
    /// # Examples
    /// ```
    /// use afford::models::Money;
    /// let amount = Money::from_cents(191667); // 1916.67
    /// assert_eq!(amount.units(), 1916);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use afford::models::Money;
    /// assert_eq!(Money::from_units(23780).cents(), 2_378_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Create a Money amount from a decimal number of currency units,
    /// rounding to the nearest hundredth
    ///
    /// Returns `None` for NaN, infinity, or a magnitude above
    /// [`Money::MAX_UNITS`].
    pub fn from_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents.abs() > Self::MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a decimal number of currency units
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Round to whole currency units, halves away from zero
    pub const fn round_units(&self) -> i64 {
        clamp_i128(div_round(self.0 as i128, 100))
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Take `pct` percent of this amount, rounded to the nearest hundredth
    ///
    /// # Examples
    /// ```
    /// use afford::models::Money;
    /// assert_eq!(Money::from_units(23780).percent(35), Money::from_units(8323));
    /// ```
    pub const fn percent(&self, pct: i64) -> Self {
        Self(clamp_i128(div_round(self.0 as i128 * pct as i128, 100)))
    }

    /// `pct` percent of this amount in currency units, without rounding
    ///
    /// Doubling the amount exactly doubles the result.
    ///
    /// # Examples
    /// ```
    /// use afford::models::Money;
    /// assert_eq!(Money::from_cents(1).percent_units(35), 0.0035);
    /// ```
    pub fn percent_units(&self, pct: i64) -> f64 {
        self.0 as f64 * pct as f64 / 10_000.0
    }

    /// Multiply by a whole factor (e.g. months per year)
    pub const fn times(&self, factor: i64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// This amount as a fraction of `base`, or `None` when `base` is zero
    pub fn ratio_of(&self, base: Money) -> Option<f64> {
        if base.is_zero() {
            None
        } else {
            Some(self.0 as f64 / base.0 as f64)
        }
    }

    /// This amount as a percentage of `base`, or `None` when `base` is zero
    pub fn percent_of(&self, base: Money) -> Option<f64> {
        if base.is_zero() {
            None
        } else {
            Some(self.0 as f64 * 100.0 / base.0 as f64)
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "1,916.67", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let digits: String = s.chars().filter(|c| *c != ',').collect();
        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());
        let out_of_range = || MoneyParseError::OutOfRange(original.trim().to_string());

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let cents = if let Some((whole, frac)) = digits.split_once('.') {
            if whole.is_empty() || frac.contains('.') {
                return Err(invalid());
            }

            // Only digits remain, so a failed parse means too many of them
            let whole: i64 = whole.parse().map_err(|_| out_of_range())?;

            // Pad or truncate the fraction to 2 digits
            let frac: i64 = match frac.len() {
                0 => 0,
                1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => frac[..2].parse().map_err(|_| invalid())?,
            };

            whole
                .checked_mul(100)
                .and_then(|c| c.checked_add(frac))
                .ok_or_else(out_of_range)?
        } else {
            digits
                .parse::<i64>()
                .ok()
                .and_then(|u| u.checked_mul(100))
                .ok_or_else(out_of_range)?
        };

        if cents > Self::MAX_CENTS {
            return Err(out_of_range());
        }

        Ok(Self(if negative { -cents } else { cents }))
    }
}

/// Integer division rounding halves away from zero (`den` must be positive)
const fn div_round(num: i128, den: i128) -> i128 {
    if num >= 0 {
        (num + den / 2) / den
    } else {
        -((-num + den / 2) / den)
    }
}

const fn clamp_i128(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

/// Insert `,` thousands separators into a run of ASCII digits
pub(crate) fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = group_thousands(&self.units().unsigned_abs().to_string());
        write!(f, "{}{}.{:02}", sign, units, self.cents_part())
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Scenario files carry decimal currency units, not minor units.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_f64(amount)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", amount)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
    #[error("Amount out of range: {0} (limit is 1,000,000,000,000 in either direction)")]
    OutOfRange(String),
}

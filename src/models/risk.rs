//! Debt-to-income risk tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper DTI bound (inclusive) for the Safe tier
pub const SAFE_DTI_MAX: f64 = 0.28;
/// Upper DTI bound (inclusive) for the Moderate tier
pub const MODERATE_DTI_MAX: f64 = 0.35;
/// Upper DTI bound (inclusive) for the High tier
pub const HIGH_DTI_MAX: f64 = 0.43;

/// Risk classification of a mortgage payment relative to salary
///
/// Variants are declared from least to most severe, so the derived ordering
/// is the severity ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Classify a debt-to-income ratio
    ///
    /// Thresholds are checked in ascending order and boundary values fall
    /// into the lower tier.
    ///
    /// # Examples
    /// ```
    /// use afford::models::RiskLevel;
    /// assert_eq!(RiskLevel::classify(0.28), RiskLevel::Safe);
    /// assert_eq!(RiskLevel::classify(0.5047), RiskLevel::VeryHigh);
    /// ```
    pub fn classify(dti: f64) -> Self {
        if dti <= SAFE_DTI_MAX {
            RiskLevel::Safe
        } else if dti <= MODERATE_DTI_MAX {
            RiskLevel::Moderate
        } else if dti <= HIGH_DTI_MAX {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }

    /// Severity index, 0 (Safe) through 3 (Very High)
    pub const fn tier(&self) -> u8 {
        match self {
            RiskLevel::Safe => 0,
            RiskLevel::Moderate => 1,
            RiskLevel::High => 2,
            RiskLevel::VeryHigh => 3,
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_fall_into_lower_tier() {
        assert_eq!(RiskLevel::classify(0.28), RiskLevel::Safe);
        assert_eq!(RiskLevel::classify(0.35), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify(0.43), RiskLevel::High);
        assert_eq!(RiskLevel::classify(0.4301), RiskLevel::VeryHigh);
    }

    #[test]
    fn test_negative_dti_is_safe() {
        assert_eq!(RiskLevel::classify(-0.5), RiskLevel::Safe);
    }

    #[test]
    fn test_monotonic_in_dti() {
        let mut previous = RiskLevel::Safe;
        for step in 0..=200 {
            let level = RiskLevel::classify(step as f64 / 200.0);
            assert!(level >= previous, "severity dropped at step {}", step);
            assert!(level.tier() >= previous.tier());
            previous = level;
        }
        assert_eq!(previous, RiskLevel::VeryHigh);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::VeryHigh.to_string(), "Very High");
        assert_eq!(RiskLevel::Moderate.tier(), 1);
    }
}

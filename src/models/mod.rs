//! Core data models for afford
//!
//! This module contains the data structures of the affordability domain:
//! money amounts, currency labels, the input record and risk tiers.

pub mod currency;
pub mod inputs;
pub mod money;
pub mod risk;

pub use currency::Currency;
pub use inputs::{AffordabilityInputs, CarExpenses, Utilities};
pub use money::{Money, MoneyParseError};
pub use risk::RiskLevel;

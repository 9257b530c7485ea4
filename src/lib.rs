//! afford - Terminal mortgage affordability calculator
//!
//! This library computes how much of a monthly salary a mortgage and the
//! household's living expenses consume, classifies the debt-to-income risk,
//! and produces advisory recommendations. Every result is a pure function of
//! the current input record.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, currency, the input record and risk tiers
//! - `services`: The affordability calculator and recommendations
//! - `reports`: Dashboard, expenses and analysis views
//! - `display`: Terminal formatting helpers
//! - `export`: JSON, YAML and CSV output; scenario files
//! - `cli`: Command-line argument handling
//! - `telemetry`: Logging setup
//!
//! # Example
//!
//! ```rust
//! use afford::models::{AffordabilityInputs, RiskLevel};
//! use afford::services::AffordabilityService;
//!
//! let inputs = AffordabilityInputs::baseline();
//! let assessment = AffordabilityService::new(&inputs).assess();
//! assert_eq!(assessment.totals.risk, RiskLevel::VeryHigh);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod telemetry;

pub use error::{AffordError, AffordResult};

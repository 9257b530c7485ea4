//! Business logic layer for afford
//!
//! The affordability calculator and the advisory rules built on top of it.

pub mod affordability;
pub mod recommendations;

pub use affordability::{
    classify_risk, compute_totals, expense_breakdown, AffordabilityService, AnnualProjection,
    Assessment, BreakdownItem, Totals,
};
pub use recommendations::{recommendations, Recommendation, Severity};

//! Reports module for afford
//!
//! The three terminal views of an assessment: the summary dashboard, the
//! itemized expenses and the narrative analysis.

pub mod analysis;
pub mod dashboard;
pub mod expenses;

pub use analysis::AnalysisReport;
pub use dashboard::{DashboardReport, OverviewRow};
pub use expenses::{ExpenseGroup, ExpensesReport};

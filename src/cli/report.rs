//! CLI commands for the terminal views

use crate::reports::{AnalysisReport, DashboardReport, ExpensesReport};
use crate::services::Assessment;

/// Which view(s) to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Risk tier, obligations overview and affordability guidelines
    Dashboard,
    /// Itemized expenses by group
    Expenses,
    /// Breakdown, recommendations and annual projections
    Analysis,
    /// All three views in order
    All,
}

/// Render a view of the assessment
pub fn render_view(assessment: &Assessment, view: View, color: bool) -> String {
    match view {
        View::Dashboard => DashboardReport::generate(assessment).format_terminal(color),
        View::Expenses => ExpensesReport::generate(assessment).format_terminal(),
        View::Analysis => AnalysisReport::generate(assessment).format_terminal(color),
        View::All => [View::Dashboard, View::Expenses, View::Analysis]
            .into_iter()
            .map(|v| render_view(assessment, v, color))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Print a view to stdout
pub fn handle_view_command(assessment: &Assessment, view: View, color: bool) {
    print!("{}", render_view(assessment, view, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AffordabilityInputs;
    use crate::services::AffordabilityService;

    #[test]
    fn test_all_contains_every_view() {
        let inputs = AffordabilityInputs::baseline();
        let assessment = AffordabilityService::new(&inputs).assess();
        let output = render_view(&assessment, View::All, false);

        let dashboard = output.find("Mortgage Affordability Dashboard").unwrap();
        let expenses = output.find("Detailed Expenses").unwrap();
        let analysis = output.find("Expense Analysis").unwrap();
        assert!(dashboard < expenses && expenses < analysis);
    }
}

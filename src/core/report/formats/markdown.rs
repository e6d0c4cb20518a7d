//! Markdown report generator
//!
//! Generates dashboard reports in Markdown with embedded Mermaid charts.
//! These reports render well in GitHub, GitLab, and VS Code.

use crate::core::dashboard::DashboardSnapshot;
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/dashboard.md");

/// Shown in place of an empty grade trajectory
const NO_GRADES: &str = "_No completed modules yet._\n";

/// Shown when no completed module has a usable start date
const NO_DURATIONS: &str = "_No completed module with a start date yet._\n";

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, snapshot: &DashboardSnapshot) -> String {
        let ctx = ReportContext::new(snapshot);
        let trajectory = MermaidGenerator::grade_trajectory_chart(&snapshot.grade_trajectory)
            .unwrap_or_else(|| NO_GRADES.to_string());
        let days = Self::days_required_section(snapshot);

        ctx.fill_common(MARKDOWN_TEMPLATE)
            .replace(
                "{{progress_chart}}",
                &MermaidGenerator::progress_chart(&snapshot.progress),
            )
            .replace("{{grade_trajectory}}", &trajectory)
            .replace("{{days_required}}", &days)
    }

    /// Chart plus a table of the days required per module
    fn days_required_section(snapshot: &DashboardSnapshot) -> String {
        let Some(chart) = MermaidGenerator::days_required_chart(&snapshot.days_required_history)
        else {
            return NO_DURATIONS.to_string();
        };

        let mut section = chart;
        section.push_str("\n| Module | Days |\n|---|---|\n");
        for entry in &snapshot.days_required_history {
            let _ = writeln!(
                section,
                "| {} | {} |",
                entry.module_name.replace('|', "\\|"),
                entry.days
            );
        }
        section
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(snapshot))
    }
}

//! Plain text report generator
//!
//! The terminal rendering used by `studyprogress show`.

use crate::core::dashboard::DashboardSnapshot;
use crate::core::report::visualization::TextChart;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;

/// Embedded text report template
const TEXT_TEMPLATE: &str = include_str!("../templates/dashboard.txt");

/// Plain text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    fn render_template(&self, snapshot: &DashboardSnapshot) -> String {
        let ctx = ReportContext::new(snapshot);
        ctx.fill_common(TEXT_TEMPLATE)
            .replace("{{progress_chart}}", &TextChart::progress(&snapshot.progress))
            .replace(
                "{{grade_trajectory}}",
                &TextChart::grade_trajectory(&snapshot.grade_trajectory),
            )
            .replace(
                "{{days_required}}",
                &TextChart::days_required(&snapshot.days_required_history),
            )
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ExamResult, Module, Program};
    use crate::core::report::tests::{date, exhausted_snapshot, sample_snapshot};

    #[test]
    fn test_render_fills_every_placeholder() {
        let out = TextReporter::new().render(&sample_snapshot()).unwrap();

        assert!(!out.contains("{{"));
        assert!(out.starts_with("B.Sc. KI\n"));
        assert!(out.contains("Grade average:   1.77"));
        assert!(out.contains("Analysis"));
        assert!(out.contains("Python"));
    }

    #[test]
    fn test_render_exhausted_program() {
        let out = TextReporter::new().render(&exhausted_snapshot()).unwrap();

        assert!(out.contains("Target pace:     ∞"));
        assert!(out.contains("Grade average:   n/a"));
        assert!(out.contains("(no completed modules yet)"));
        assert!(out.contains("(no completed module with a start date yet)"));
    }

    #[test]
    fn test_render_completions_without_start_dates() {
        let mut program = Program::new("KI".to_string(), 8, 180, date(2025, 9, 1));
        let mut module = Module::new("Analysis".to_string(), 5, None);
        module
            .set_exam_result(ExamResult::new(1.3, date(2025, 10, 1)))
            .unwrap();
        program.add_module(module);
        let snapshot = DashboardSnapshot::assemble(&program, date(2025, 12, 1));

        let out = TextReporter::new().render(&snapshot).unwrap();

        assert!(!out.contains("(no completed modules yet)"));
        assert!(out.contains("(no completed module with a start date yet)"));
    }
}

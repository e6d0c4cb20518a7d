//! Mermaid chart generator for dashboard reports
//!
//! Emits `xychart-beta` blocks that GitHub, GitLab and most Markdown viewers
//! render inline.

use crate::core::dashboard::{DaysRequiredEntry, ProgressData};
use crate::core::store::catalog::{MAX_GRADE, MIN_GRADE};
use std::fmt::Write;

/// Generator for Mermaid chart syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Bar chart of earned, expected and total credits
    #[must_use]
    pub fn progress_chart(progress: &ProgressData) -> String {
        let mut output = String::from("```mermaid\nxychart-beta\n");
        output.push_str("    title \"Credits\"\n");
        output.push_str("    x-axis [\"Earned\", \"Expected\", \"Total\"]\n");
        let _ = writeln!(output, "    y-axis \"ECTS\" 0 --> {}", progress.total);
        let _ = writeln!(
            output,
            "    bar [{}, {}, {}]",
            progress.earned, progress.expected, progress.total
        );
        output.push_str("```\n");
        output
    }

    /// Line chart of the running grade average
    ///
    /// Returns `None` when there is nothing to plot.
    #[must_use]
    pub fn grade_trajectory_chart(trajectory: &[f64]) -> Option<String> {
        if trajectory.is_empty() {
            return None;
        }
        let axis: Vec<String> = (1..=trajectory.len()).map(|i| i.to_string()).collect();
        let values: Vec<String> = trajectory.iter().map(|v| format!("{v:.2}")).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        output.push_str("    title \"Grade average\"\n");
        let _ = writeln!(output, "    x-axis [{}]", axis.join(", "));
        let _ = writeln!(output, "    y-axis \"Grade\" {MIN_GRADE:.1} --> {MAX_GRADE:.1}");
        let _ = writeln!(output, "    line [{}]", values.join(", "));
        output.push_str("```\n");
        Some(output)
    }

    /// Bar chart of days required per completed module
    ///
    /// Returns `None` when there is nothing to plot.
    #[must_use]
    pub fn days_required_chart(history: &[DaysRequiredEntry]) -> Option<String> {
        if history.is_empty() {
            return None;
        }
        let labels: Vec<String> = history
            .iter()
            .map(|e| format!("\"{}\"", Self::sanitize_label(&e.module_name)))
            .collect();
        let values: Vec<String> = history.iter().map(|e| e.days.to_string()).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        output.push_str("    title \"Days required\"\n");
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        output.push_str("    y-axis \"Days\"\n");
        let _ = writeln!(output, "    bar [{}]", values.join(", "));
        output.push_str("```\n");
        Some(output)
    }

    /// Make a module name safe inside a quoted Mermaid label
    fn sanitize_label(name: &str) -> String {
        name.replace('"', "'")
    }
}

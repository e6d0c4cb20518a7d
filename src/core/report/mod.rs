//! Report generation for dashboard snapshots
//!
//! Renders a [`DashboardSnapshot`] as plain text, Markdown (with Mermaid
//! charts) or JSON. Every reporter reads only the snapshot.

pub mod formats;
pub mod visualization;

use crate::core::dashboard::DashboardSnapshot;
use std::error::Error;
use std::path::{Path, PathBuf};

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat, TextReporter};
pub use visualization::{MermaidGenerator, TextChart};

/// Placeholder shown when the program has no grade average yet
pub const NO_AVERAGE: &str = "n/a";

/// Formatting helpers shared by the template-based reporters
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Snapshot being reported
    pub snapshot: &'a DashboardSnapshot,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(snapshot: &'a DashboardSnapshot) -> Self {
        Self { snapshot }
    }

    /// Grade average with two decimals, or [`NO_AVERAGE`]
    #[must_use]
    pub fn grade_average(&self) -> String {
        self.snapshot
            .grade_average
            .map_or_else(|| NO_AVERAGE.to_string(), |avg| format!("{avg:.2}"))
    }

    /// Reference date as `YYYY-MM-DD`
    #[must_use]
    pub fn as_of(&self) -> String {
        self.snapshot.as_of.format("%Y-%m-%d").to_string()
    }

    /// Planned duration in years with one decimal
    #[must_use]
    pub fn planned_years(&self) -> String {
        format!("{:.1}", self.snapshot.forecast.planned_years)
    }

    /// Label for a goal flag
    #[must_use]
    pub const fn goal_label(met: bool) -> &'static str {
        if met {
            "✓ on track"
        } else {
            "✗ off track"
        }
    }

    /// Pacing line, marking the unbounded case explicitly
    #[must_use]
    pub fn pace_line(&self) -> String {
        if self.snapshot.pace_is_unbounded() {
            format!("{} (planned time used up)", self.snapshot.pace_text)
        } else {
            format!("{} per 5-credit module", self.snapshot.pace_text)
        }
    }

    /// Substitute the header and goal placeholders shared by all templates
    #[must_use]
    pub fn fill_common(&self, template: &str) -> String {
        let snapshot = self.snapshot;
        template
            .replace("{{program_name}}", &snapshot.program_name)
            .replace("{{as_of}}", &self.as_of())
            .replace("{{earned}}", &snapshot.progress.earned.to_string())
            .replace("{{expected}}", &snapshot.progress.expected.to_string())
            .replace("{{total}}", &snapshot.progress.total.to_string())
            .replace("{{grade_average}}", &self.grade_average())
            .replace("{{pace}}", &self.pace_line())
            .replace(
                "{{grade_goal}}",
                Self::goal_label(snapshot.forecast.grade_goal_met),
            )
            .replace(
                "{{pace_goal}}",
                Self::goal_label(snapshot.forecast.pace_goal_met),
            )
            .replace("{{planned_years}}", &self.planned_years())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(
        &self,
        snapshot: &DashboardSnapshot,
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        let content = self.render(snapshot)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }
}

/// Reporter for `format`
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

/// File name for a report: `<program>-<date>.<ext>`
///
/// Characters other than ASCII alphanumerics, `-` and `_` become `_`.
#[must_use]
pub fn report_file_name(snapshot: &DashboardSnapshot, format: ReportFormat) -> PathBuf {
    let stem: String = snapshot
        .program_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    PathBuf::from(format!(
        "{stem}-{}.{}",
        snapshot.as_of.format("%Y-%m-%d"),
        format.extension()
    ))
}

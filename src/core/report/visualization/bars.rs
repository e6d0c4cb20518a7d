//! Horizontal bar charts for terminal output

use crate::core::dashboard::{DaysRequiredEntry, ProgressData};
use crate::core::store::catalog::MAX_GRADE;
use std::fmt::Write;

/// Width of the credit progress bars
const PROGRESS_WIDTH: usize = 40;

/// Width of the per-entry bars
const ENTRY_WIDTH: usize = 24;

/// Longest module name shown before it is cut
const MAX_LABEL_CHARS: usize = 32;

/// Line printed instead of an empty grade trajectory
pub const NO_GRADES: &str = "  (no completed modules yet)";

/// Line printed when no completed module has a usable start date
pub const NO_DURATIONS: &str = "  (no completed module with a start date yet)";

/// Generator for text bar charts
pub struct TextChart;

impl TextChart {
    /// Bar of `width` cells, filled in proportion to `value / max`
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn bar(value: f64, max: f64, width: usize) -> String {
        let filled = if max > 0.0 {
            ((value / max) * width as f64).round().clamp(0.0, width as f64) as usize
        } else {
            0
        };
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }

    /// Earned and expected credits against the credit target
    #[must_use]
    pub fn progress(progress: &ProgressData) -> String {
        let total = f64::from(progress.total);
        let mut output = String::new();
        for (label, value) in [("Earned", progress.earned), ("Expected", progress.expected)] {
            let _ = writeln!(
                output,
                "  {label:<9}{} {value:>4} / {}",
                Self::bar(f64::from(value), total, PROGRESS_WIDTH),
                progress.total
            );
        }
        output
    }

    /// Running grade averages, one line per completed module
    #[must_use]
    pub fn grade_trajectory(trajectory: &[f64]) -> String {
        if trajectory.is_empty() {
            return format!("{NO_GRADES}\n");
        }
        let mut output = String::new();
        for (index, average) in trajectory.iter().enumerate() {
            let _ = writeln!(
                output,
                "  {:>3}. {average:.2} {}",
                index + 1,
                Self::bar(*average, MAX_GRADE, ENTRY_WIDTH)
            );
        }
        output
    }

    /// Days from start to exam per completed module, scaled to the longest
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn days_required(history: &[DaysRequiredEntry]) -> String {
        if history.is_empty() {
            return format!("{NO_DURATIONS}\n");
        }
        let labels: Vec<String> = history
            .iter()
            .map(|entry| entry.module_name.chars().take(MAX_LABEL_CHARS).collect())
            .collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let max_days = history.iter().map(|e| e.days).max().unwrap_or(0) as f64;

        let mut output = String::new();
        for (label, entry) in labels.iter().zip(history) {
            let _ = writeln!(
                output,
                "  {label:<label_width$} {} {:>4} d",
                Self::bar(entry.days as f64, max_days, ENTRY_WIDTH),
                entry.days
            );
        }
        output
    }
}

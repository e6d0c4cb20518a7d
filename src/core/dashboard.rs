//! Dashboard data assembly
//!
//! Runs every metric against one program and a reference date and bundles
//! the results into a [`DashboardSnapshot`], the only artifact handed to the
//! CLI and report renderers.

use crate::core::metrics::{self, GoalForecast, PACE_EXHAUSTED_SENTINEL};
use crate::core::models::Program;
use crate::core::store::{ProgramId, Store};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Credit granularity used when rounding the expected credits
pub const MODULE_CREDIT_STEP: f64 = 5.0;

/// Months per semester
const MONTHS_PER_SEMESTER: u32 = 6;

/// Earned, expected-by-today and total credits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressData {
    /// Credits of completed modules
    pub earned: u32,
    /// Credits expected by the reference date
    pub expected: u32,
    /// Program credit target
    pub total: u32,
}

/// Days spent on one completed module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysRequiredEntry {
    /// Module name
    pub module_name: String,
    /// Days from module start to exam
    pub days: i64,
}

/// Everything a presentation layer needs to draw the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Program name
    pub program_name: String,
    /// Reference date the snapshot was computed for
    pub as_of: NaiveDate,
    /// Credit progress
    pub progress: ProgressData,
    /// Weighted grade average, absent without completed modules
    pub grade_average: Option<f64>,
    /// Days per 5-credit module; [`PACE_EXHAUSTED_SENTINEL`] means unbounded
    pub pace_target: f64,
    /// Display form of `pace_target`
    pub pace_text: String,
    /// Goal forecast
    pub forecast: GoalForecast,
    /// Running grade averages in completion order
    pub grade_trajectory: Vec<f64>,
    /// Days required per completed module in completion order
    pub days_required_history: Vec<DaysRequiredEntry>,
}

impl DashboardSnapshot {
    /// Assemble the snapshot for `program` as of `today`
    #[must_use]
    pub fn assemble(program: &Program, today: NaiveDate) -> Self {
        let progress = ProgressData {
            earned: metrics::earned_credits(program),
            expected: expected_credits(program, today),
            total: program.total_credits(),
        };
        let grade_average = metrics::weighted_grade_average(program);
        let pace_target = metrics::days_per_module_target(program, today);
        let forecast = metrics::goal_forecast(program, grade_average, progress.expected);

        Self {
            program_name: program.name().to_string(),
            as_of: today,
            progress,
            grade_average,
            pace_target,
            pace_text: pace_text(pace_target),
            forecast,
            grade_trajectory: metrics::grade_average_trajectory(program),
            days_required_history: days_required_history(program),
        }
    }

    /// Whether the pacing target is the "no time left" sentinel
    #[must_use]
    pub fn pace_is_unbounded(&self) -> bool {
        is_exhausted(self.pace_target)
    }
}

/// Load a program from `store` and assemble its snapshot.
///
/// # Returns
/// `None` if the store has no program with this id
pub fn build_dashboard<S: Store + ?Sized>(
    store: &S,
    id: ProgramId,
    today: NaiveDate,
) -> Option<DashboardSnapshot> {
    let Some(program) = store.load_program(id) else {
        debug!(program_id = id, "program not found, no dashboard");
        return None;
    };
    debug!(
        program_id = id,
        modules = program.modules().len(),
        %today,
        "assembling dashboard"
    );
    Some(DashboardSnapshot::assemble(&program, today))
}

/// Planned end of study: `semesters * 6` months after `start`.
///
/// The day of month is clamped to the last valid day of the target month
/// (Aug 31 + 6 months = Feb 28/29).
#[must_use]
pub fn planned_end_date(start: NaiveDate, planned_semesters: u32) -> NaiveDate {
    let months = planned_semesters.saturating_mul(MONTHS_PER_SEMESTER);
    start
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Credits expected by `today` if progress were linear over the planned duration.
///
/// `today` is clamped into `[start, end]`, the linear share is rounded to the
/// nearest multiple of five and clamped into `[0, total_credits]`.
#[must_use]
pub fn expected_credits(program: &Program, today: NaiveDate) -> u32 {
    let start = program.start_date();
    let end = planned_end_date(start, program.planned_semesters());
    let total_span_days = (end - start).num_days().max(0);
    let clamped_today = today.max(start).min(end);
    let elapsed_days = (clamped_today - start).num_days();

    #[allow(clippy::cast_precision_loss)]
    let raw = if total_span_days > 0 {
        f64::from(program.total_credits()) * (elapsed_days as f64 / total_span_days as f64)
    } else {
        0.0
    };
    round_to_module_credits(raw, program.total_credits())
}

/// Round `raw` to the nearest multiple of five (halves away from zero) and
/// clamp it into `[0, total_credits]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_to_module_credits(raw: f64, total_credits: u32) -> u32 {
    if total_credits == 0 {
        return 0;
    }
    let rounded = (raw / MODULE_CREDIT_STEP).round() * MODULE_CREDIT_STEP;
    rounded.clamp(0.0, f64::from(total_credits)) as u32
}

/// Display text for a pacing target: `"∞"` for the sentinel, otherwise whole days.
#[must_use]
pub fn pace_text(pace_target: f64) -> String {
    if is_exhausted(pace_target) {
        "∞".to_string()
    } else {
        format!("{pace_target:.0} days")
    }
}

/// Only the exact sentinel is unbounded; real targets may exceed 999 days
#[allow(clippy::float_cmp)]
fn is_exhausted(pace_target: f64) -> bool {
    pace_target == PACE_EXHAUSTED_SENTINEL
}

/// Completed modules with a defined day count, oldest exam first
fn days_required_history(program: &Program) -> Vec<DaysRequiredEntry> {
    program
        .chronological_completions()
        .into_iter()
        .filter_map(|module| {
            module.days_required().map(|days| DaysRequiredEntry {
                module_name: module.name().to_string(),
                days,
            })
        })
        .collect()
}

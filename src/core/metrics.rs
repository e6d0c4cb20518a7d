//! Progress and forecast metrics
//!
//! Pure functions over a fully loaded [`Program`]. None of them read the
//! clock; callers pass the reference date explicitly.

use crate::core::models::{Module, Program};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Average calendar days per year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Semesters per calendar year
pub const SEMESTERS_PER_YEAR: f64 = 2.0;

/// Planned vacation per year (six weeks)
pub const VACATION_DAYS_PER_YEAR: f64 = 42.0;

/// Credit size the pacing target is normalized to
pub const CREDIT_REFERENCE: f64 = 5.0;

/// Pacing value returned once no study days remain
pub const PACE_EXHAUSTED_SENTINEL: f64 = 999.0;

/// Highest average that still meets the grade goal
pub const GRADE_GOAL_THRESHOLD: f64 = 1.9;

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum of credits over completed modules.
#[must_use]
pub fn earned_credits(program: &Program) -> u32 {
    program.completed_modules().map(Module::credits).sum()
}

/// Running totals for a credit-weighted grade mean.
///
/// Zero-credit modules carry no weight; while the accumulated weight is zero
/// the plain mean of the grades seen so far is reported instead.
#[derive(Debug, Default, Clone, Copy)]
struct GradeAccumulator {
    weighted_sum: f64,
    weight: f64,
    grade_sum: f64,
    count: u32,
}

impl GradeAccumulator {
    fn push(&mut self, grade: f64, credits: u32) {
        let credits = f64::from(credits);
        self.weighted_sum += grade * credits;
        self.weight += credits;
        self.grade_sum += grade;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else if self.weight > 0.0 {
            Some(round2(self.weighted_sum / self.weight))
        } else {
            Some(round2(self.grade_sum / f64::from(self.count)))
        }
    }
}

/// Credit-weighted grade average over completed modules.
///
/// Sums in exam-date order so the result is bit-identical to the last
/// entry of [`grade_average_trajectory`].
///
/// # Returns
/// `None` when no module is completed, otherwise the average rounded with [`round2`].
#[must_use]
pub fn weighted_grade_average(program: &Program) -> Option<f64> {
    let mut acc = GradeAccumulator::default();
    for module in program.chronological_completions() {
        if let Some(exam) = module.exam_result() {
            acc.push(exam.grade(), module.credits());
        }
    }
    acc.mean()
}

/// Running weighted average after each completion, oldest exam first.
///
/// Example: three 5-credit modules graded 1.0, 2.0, 3.0 in that order give
/// `[1.0, 1.5, 2.0]`.
#[must_use]
pub fn grade_average_trajectory(program: &Program) -> Vec<f64> {
    let mut acc = GradeAccumulator::default();
    program
        .chronological_completions()
        .into_iter()
        .filter_map(|module| {
            let exam = module.exam_result()?;
            acc.push(exam.grade(), module.credits());
            acc.mean()
        })
        .collect()
}

/// Study days available over the whole program after subtracting vacation.
#[must_use]
pub fn net_program_days(planned_semesters: u32) -> f64 {
    let semesters = f64::from(planned_semesters);
    let total_days = semesters * (DAYS_PER_YEAR / SEMESTERS_PER_YEAR);
    let vacation_days = semesters * (VACATION_DAYS_PER_YEAR / SEMESTERS_PER_YEAR);
    total_days - vacation_days
}

/// Days that may be spent on an average 5-credit module while still
/// finishing within the planned duration.
///
/// Returns `0.0` once the credit target is met and
/// [`PACE_EXHAUSTED_SENTINEL`] when credits remain but no days do.
/// `as_of` before the program start is taken as given.
#[must_use]
pub fn days_per_module_target(program: &Program, as_of: NaiveDate) -> f64 {
    let elapsed_days = (as_of - program.start_date()).num_days();
    #[allow(clippy::cast_precision_loss)]
    let remaining_days = net_program_days(program.planned_semesters()) - elapsed_days as f64;

    let outstanding =
        i64::from(program.total_credits()) - i64::from(earned_credits(program));

    if outstanding <= 0 {
        return 0.0;
    }
    if remaining_days <= 0.0 {
        return PACE_EXHAUSTED_SENTINEL;
    }

    #[allow(clippy::cast_precision_loss)]
    let per_credit = remaining_days / outstanding as f64;
    round2(per_credit * CREDIT_REFERENCE)
}

/// Whether the grade and pace goals are currently met
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalForecast {
    /// Average exists and is at or below [`GRADE_GOAL_THRESHOLD`]
    pub grade_goal_met: bool,
    /// Earned credits reach the expected-by-today credits
    pub pace_goal_met: bool,
    /// Planned duration in years
    pub planned_years: f64,
}

/// Evaluate the goal forecast.
///
/// # Arguments
/// * `program` - Program to evaluate
/// * `average` - Result of [`weighted_grade_average`]
/// * `target_credits_for_today` - Credits expected by the reference date
#[must_use]
pub fn goal_forecast(
    program: &Program,
    average: Option<f64>,
    target_credits_for_today: u32,
) -> GoalForecast {
    GoalForecast {
        grade_goal_met: average.is_some_and(|avg| avg <= GRADE_GOAL_THRESHOLD),
        pace_goal_met: earned_credits(program) >= target_credits_for_today,
        planned_years: f64::from(program.planned_semesters()) / SEMESTERS_PER_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ExamResult;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn program() -> Program {
        Program::new("B.Sc. KI".to_string(), 8, 180, date(2025, 9, 1))
    }

    fn completed(name: &str, credits: u32, grade: f64, on: NaiveDate) -> Module {
        let mut module = Module::new(name.to_string(), credits, None);
        module.set_exam_result(ExamResult::new(grade, on)).unwrap();
        module
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_round2() {
        assert!(approx(round2(1.234), 1.23));
        assert!(approx(round2(1.5), 1.5));
        assert!(approx(round2(2.0 / 3.0), 0.67));
        assert!(approx(round2(-1.234), -1.23));
    }

    #[test]
    fn test_earned_credits_ignores_open_modules() {
        let mut p = program();
        p.add_module(completed("a", 5, 1.0, date(2025, 10, 1)));
        p.add_module(Module::new("b".to_string(), 10, None));
        p.add_module(completed("c", 9, 4.0, date(2025, 12, 1)));

        assert_eq!(earned_credits(&p), 14);
    }

    #[test]
    fn test_earned_credits_empty_program() {
        assert_eq!(earned_credits(&program()), 0);
    }

    #[test]
    fn test_weighted_average_uses_credits_as_weights() {
        let mut p = program();
        p.add_module(completed("small", 5, 1.0, date(2025, 10, 1)));
        p.add_module(completed("large", 15, 3.0, date(2025, 11, 1)));

        // (1.0*5 + 3.0*15) / 20 = 2.5
        assert_eq!(weighted_grade_average(&p), Some(2.5));
    }

    #[test]
    fn test_weighted_average_rounds_to_two_decimals() {
        let mut p = program();
        p.add_module(completed("a", 5, 1.0, date(2025, 10, 1)));
        p.add_module(completed("b", 5, 1.3, date(2025, 10, 2)));
        p.add_module(completed("c", 5, 1.7, date(2025, 10, 3)));

        // 4.0 / 3 = 1.3333…
        assert_eq!(weighted_grade_average(&p), Some(1.33));
    }

    #[test]
    fn test_weighted_average_undefined_without_completions() {
        let mut p = program();
        assert_eq!(weighted_grade_average(&p), None);

        p.add_module(Module::new("open".to_string(), 5, None));
        assert_eq!(weighted_grade_average(&p), None);
    }

    #[test]
    fn test_zero_credit_completions_fall_back_to_plain_mean() {
        let mut p = program();
        p.add_module(completed("a", 0, 1.0, date(2025, 10, 1)));
        p.add_module(completed("b", 0, 2.0, date(2025, 10, 2)));

        assert_eq!(weighted_grade_average(&p), Some(1.5));
        assert_eq!(grade_average_trajectory(&p), vec![1.0, 1.5]);
    }

    #[test]
    fn test_trajectory_follows_exam_dates_not_insertion_order() {
        let mut p = program();
        p.add_module(completed("third", 5, 3.0, date(2026, 3, 1)));
        p.add_module(completed("first", 5, 1.0, date(2025, 10, 1)));
        p.add_module(completed("second", 5, 2.0, date(2026, 1, 15)));

        assert_eq!(grade_average_trajectory(&p), vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_trajectory_empty_program() {
        assert!(grade_average_trajectory(&program()).is_empty());
    }

    #[test]
    fn test_net_program_days() {
        // 8 * 182.625 - 8 * 21
        assert!(approx(net_program_days(8), 1293.0));
    }

    #[test]
    fn test_days_per_module_target_normal_branch() {
        let p = program();
        // 1293 remaining days on start day, 180 outstanding credits
        let target = days_per_module_target(&p, date(2025, 9, 1));
        assert!(approx(target, round2(1293.0 / 180.0 * 5.0)));
        assert!(approx(target, 35.92));
    }

    #[test]
    fn test_days_per_module_target_before_start_is_not_clamped() {
        let p = program();
        // 10 days before start: 1303 remaining days
        let target = days_per_module_target(&p, date(2025, 8, 22));
        assert!(approx(target, round2(1303.0 / 180.0 * 5.0)));
    }

    #[test]
    fn test_days_per_module_target_goal_met() {
        let mut p = Program::new("Short".to_string(), 1, 5, date(2025, 9, 1));
        p.add_module(completed("only", 5, 2.0, date(2025, 10, 1)));

        assert!(approx(days_per_module_target(&p, date(2030, 1, 1)), 0.0));
    }

    #[test]
    fn test_days_per_module_target_time_exhausted() {
        let p = program();
        // Net days run out after 1293 days
        assert!(approx(
            days_per_module_target(&p, date(2029, 3, 17)),
            PACE_EXHAUSTED_SENTINEL
        ));
        assert!(approx(
            days_per_module_target(&p, date(2035, 1, 1)),
            PACE_EXHAUSTED_SENTINEL
        ));
    }

    #[test]
    fn test_goal_forecast() {
        let mut p = program();
        p.add_module(completed("a", 10, 1.7, date(2025, 10, 1)));

        let forecast = goal_forecast(&p, Some(1.7), 10);
        assert!(forecast.grade_goal_met);
        assert!(forecast.pace_goal_met);
        assert!(approx(forecast.planned_years, 4.0));

        let behind = goal_forecast(&p, Some(1.91), 15);
        assert!(!behind.grade_goal_met);
        assert!(!behind.pace_goal_met);
    }

    #[test]
    fn test_goal_forecast_threshold_is_inclusive() {
        let p = program();
        assert!(goal_forecast(&p, Some(1.9), 0).grade_goal_met);
    }

    #[test]
    fn test_goal_forecast_without_average() {
        let p = Program::new("Odd".to_string(), 7, 210, date(2025, 9, 1));
        let forecast = goal_forecast(&p, None, 0);
        assert!(!forecast.grade_goal_met);
        assert!(forecast.pace_goal_met);
        assert!(approx(forecast.planned_years, 3.5));
    }
}

//! End-to-end checks of the metric engine and dashboard assembly

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use study_progress::dashboard::{
    build_dashboard, expected_credits, planned_end_date, DashboardSnapshot,
};
use study_progress::metrics::{
    days_per_module_target, earned_credits, grade_average_trajectory, net_program_days,
    weighted_grade_average, PACE_EXHAUSTED_SENTINEL,
};
use study_progress::models::{ExamResult, Module, Program};
use study_progress::store::{Catalog, Store};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn reference_program() -> Program {
    Program::new("B.Sc. KI".to_string(), 8, 180, date(2025, 9, 1))
}

fn completed(name: &str, credits: u32, grade: f64, on: NaiveDate) -> Module {
    let mut module = Module::new(name.to_string(), credits, None);
    module.set_exam_result(ExamResult::new(grade, on)).unwrap();
    module
}

#[test]
fn test_single_completed_module_scenario() {
    let mut program = reference_program();
    let mut module = Module::new("Analysis".to_string(), 5, Some(date(2025, 9, 1)));
    module
        .set_exam_result(ExamResult::new(1.0, date(2025, 10, 1)))
        .unwrap();
    program.add_module(module);

    assert_eq!(earned_credits(&program), 5);
    assert_eq!(weighted_grade_average(&program), Some(1.0));
    assert_eq!(grade_average_trajectory(&program), vec![1.0]);
    assert_eq!(program.modules()[0].days_required(), Some(30));

    let snapshot = DashboardSnapshot::assemble(&program, date(2025, 10, 1));
    assert_eq!(snapshot.days_required_history.len(), 1);
    assert_eq!(snapshot.days_required_history[0].days, 30);
}

#[test]
fn test_trajectory_of_three_modules() {
    let mut program = reference_program();
    // Inserted out of date order on purpose
    program.add_module(completed("c", 5, 3.0, date(2026, 3, 1)));
    program.add_module(completed("a", 5, 1.0, date(2025, 11, 1)));
    program.add_module(completed("b", 5, 2.0, date(2026, 1, 15)));

    assert_eq!(grade_average_trajectory(&program), vec![1.0, 1.5, 2.0]);
    assert_eq!(weighted_grade_average(&program), Some(2.0));
}

#[test]
fn test_empty_program_scenario() {
    let program = reference_program();
    let as_of = date(2026, 9, 1);

    assert_eq!(earned_credits(&program), 0);
    assert_eq!(weighted_grade_average(&program), None);
    assert!(grade_average_trajectory(&program).is_empty());

    // 1293 net days - 365 elapsed = 928 remaining; 928 / 180 * 5 = 25.777...
    let target = days_per_module_target(&program, as_of);
    assert!((target - 25.78).abs() < 1e-9);

    let snapshot = DashboardSnapshot::assemble(&program, as_of);
    assert_eq!(snapshot.grade_average, None);
    assert!(!snapshot.forecast.grade_goal_met);
    assert_eq!(snapshot.pace_text, "26 days");
}

#[test]
fn test_pacing_branches() {
    let mut done = Program::new("Done".to_string(), 1, 10, date(2020, 1, 1));
    done.add_module(completed("a", 10, 2.0, date(2020, 3, 1)));
    // Credits met wins over exhausted time
    assert_eq!(days_per_module_target(&done, date(2030, 1, 1)), 0.0);

    let late = Program::new("Late".to_string(), 1, 10, date(2020, 1, 1));
    assert_eq!(
        days_per_module_target(&late, date(2030, 1, 1)),
        PACE_EXHAUSTED_SENTINEL
    );

    // Before the start the elapsed days are negative, not clamped
    let early = days_per_module_target(&late, date(2019, 12, 22));
    let expected = ((net_program_days(1) + 10.0) / 10.0 * 5.0 * 100.0).round() / 100.0;
    assert!((early - expected).abs() < 1e-9);
}

#[test]
fn test_build_dashboard_through_store() {
    let mut catalog = Catalog::new();
    let program = catalog
        .create_program("B.Sc. KI", 8, 180, date(2025, 9, 1))
        .unwrap();
    let module = catalog
        .create_module("Analysis", 5, Some(date(2025, 9, 1)), Some(program))
        .unwrap();
    catalog.record_exam(module, 1.7, date(2025, 10, 20)).unwrap();

    let snapshot = build_dashboard(&catalog, program, date(2025, 11, 1)).unwrap();
    assert_eq!(snapshot.program_name, "B.Sc. KI");
    assert_eq!(snapshot.progress.earned, 5);
    assert_eq!(snapshot.grade_average, Some(1.7));
    assert!(snapshot.forecast.grade_goal_met);

    assert!(build_dashboard(&catalog, program + 1, date(2025, 11, 1)).is_none());
    let as_dyn: &dyn Store = &catalog;
    assert!(build_dashboard(as_dyn, program, date(2025, 11, 1)).is_some());
}

#[test]
fn test_expected_credits_end_of_program() {
    let program = reference_program();
    let end = planned_end_date(program.start_date(), program.planned_semesters());

    assert_eq!(end, date(2029, 9, 1));
    assert_eq!(expected_credits(&program, end), 180);
    assert_eq!(expected_credits(&program, end - Duration::days(1)), 180);
}

/// (credits, optional (grade in tenths, exam day offset))
fn module_specs() -> impl Strategy<Value = Vec<(u32, Option<(u8, i64)>)>> {
    prop::collection::vec((1u32..=30, prop::option::of((10u8..=40, 0i64..1500))), 0..12)
}

fn build(specs: &[(u32, Option<(u8, i64)>)]) -> Program {
    let start = date(2025, 9, 1);
    let mut program = Program::new("P".to_string(), 8, 180, start);
    for (index, (credits, exam)) in specs.iter().enumerate() {
        let mut module = Module::new(format!("m{index}"), *credits, Some(start));
        if let Some((tenths, offset)) = exam {
            let exam = ExamResult::new(f64::from(*tenths) / 10.0, start + Duration::days(*offset));
            module.set_exam_result(exam).unwrap();
        }
        program.add_module(module);
    }
    program
}

proptest! {
    #[test]
    fn prop_earned_credits_is_permutation_invariant(specs in module_specs()) {
        let program = build(&specs);
        let mut reversed = specs.clone();
        reversed.reverse();

        let expected: u32 = specs
            .iter()
            .filter(|(_, exam)| exam.is_some())
            .map(|(credits, _)| credits)
            .sum();
        prop_assert_eq!(earned_credits(&program), expected);
        prop_assert_eq!(earned_credits(&build(&reversed)), expected);

        let a = weighted_grade_average(&program);
        let b = weighted_grade_average(&build(&reversed));
        prop_assert_eq!(a.is_some(), b.is_some());
        if let (Some(a), Some(b)) = (a, b) {
            prop_assert!((a - b).abs() <= 0.01 + 1e-9);
        }
    }

    #[test]
    fn prop_average_bounds_and_trajectory(specs in module_specs()) {
        let program = build(&specs);
        let grades: Vec<f64> = program
            .completed_modules()
            .filter_map(|m| m.exam_result().map(ExamResult::grade))
            .collect();
        let average = weighted_grade_average(&program);
        let trajectory = grade_average_trajectory(&program);

        prop_assert_eq!(average.is_none(), grades.is_empty());
        prop_assert_eq!(trajectory.len(), grades.len());
        if let Some(avg) = average {
            let min = grades.iter().copied().fold(f64::INFINITY, f64::min);
            let max = grades.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9);
            prop_assert_eq!(trajectory.last().copied(), Some(avg));
        }

        let dates: Vec<NaiveDate> = program
            .chronological_completions()
            .iter()
            .filter_map(|m| m.exam_result().map(ExamResult::date))
            .collect();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_expected_credits_bounds(
        semesters in 1u32..=12,
        total_fives in 1u32..=60,
        start_offset in 0i64..3000,
        today_offset in -400i64..4000,
    ) {
        let start = date(2020, 1, 31) + Duration::days(start_offset);
        let total = total_fives * 5;
        let program = Program::new("P".to_string(), semesters, total, start);
        let today = start + Duration::days(today_offset);
        let end = planned_end_date(start, semesters);

        let expected = expected_credits(&program, today);
        prop_assert_eq!(expected % 5, 0);
        prop_assert!(expected <= total);
        if today <= start {
            prop_assert_eq!(expected, 0);
        }
        if today >= end {
            prop_assert_eq!(expected, total);
        }
    }

    #[test]
    fn prop_pacing_branches_are_exclusive(
        specs in module_specs(),
        offset in -100i64..3000,
    ) {
        let program = build(&specs);
        let as_of = program.start_date() + Duration::days(offset);
        #[allow(clippy::cast_precision_loss)]
        let remaining = net_program_days(program.planned_semesters()) - offset as f64;
        let target = days_per_module_target(&program, as_of);

        if earned_credits(&program) >= program.total_credits() {
            prop_assert_eq!(target, 0.0);
        } else if remaining <= 0.0 {
            prop_assert_eq!(target, PACE_EXHAUSTED_SENTINEL);
        } else {
            prop_assert!(target > 0.0);
        }
    }
}

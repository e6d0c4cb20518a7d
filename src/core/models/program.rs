//! Program model

use super::Module;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a degree program ("Studiengang") and the modules it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    name: String,
    planned_semesters: u32,
    total_credits: u32,
    start_date: NaiveDate,
    modules: Vec<Module>,
}

impl Program {
    /// Create a new program with no modules
    ///
    /// # Arguments
    /// * `name` - Program name (e.g., "B.Sc. Informatik")
    /// * `planned_semesters` - Standard period of study in semesters
    /// * `total_credits` - Credits required to graduate
    /// * `start_date` - First day of study
    #[must_use]
    pub const fn new(
        name: String,
        planned_semesters: u32,
        total_credits: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            name,
            planned_semesters,
            total_credits,
            start_date,
            modules: Vec::new(),
        }
    }

    /// Program name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Planned number of semesters
    #[must_use]
    pub const fn planned_semesters(&self) -> u32 {
        self.planned_semesters
    }

    /// Credit target
    #[must_use]
    pub const fn total_credits(&self) -> u32 {
        self.total_credits
    }

    /// First day of study
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Modules in insertion order
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Append a module
    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    /// Completed modules in insertion order
    pub fn completed_modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter().filter(|m| m.is_completed())
    }

    /// Completed modules ordered by exam date.
    ///
    /// Ties keep insertion order. The view is rebuilt on every call and never
    /// changes the order of [`modules`](Self::modules).
    #[must_use]
    pub fn chronological_completions(&self) -> Vec<&Module> {
        let mut completed: Vec<&Module> = self.completed_modules().collect();
        completed.sort_by_key(|m| m.exam_result().map(super::ExamResult::date));
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ExamResult;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn completed(name: &str, grade: f64, on: NaiveDate) -> Module {
        let mut module = Module::new(name.to_string(), 5, None);
        module.set_exam_result(ExamResult::new(grade, on)).unwrap();
        module
    }

    #[test]
    fn test_program_creation() {
        let program = Program::new("B.Sc. KI".to_string(), 8, 180, date(2025, 9, 1));

        assert_eq!(program.name(), "B.Sc. KI");
        assert_eq!(program.planned_semesters(), 8);
        assert_eq!(program.total_credits(), 180);
        assert_eq!(program.start_date(), date(2025, 9, 1));
        assert!(program.modules().is_empty());
    }

    #[test]
    fn test_add_module_keeps_insertion_order() {
        let mut program = Program::new("B.Sc. KI".to_string(), 8, 180, date(2025, 9, 1));
        program.add_module(Module::new("B".to_string(), 5, None));
        program.add_module(Module::new("A".to_string(), 5, None));

        let names: Vec<&str> = program.modules().iter().map(Module::name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_chronological_completions_sorts_by_exam_date() {
        let mut program = Program::new("B.Sc. KI".to_string(), 8, 180, date(2025, 9, 1));
        program.add_module(completed("late", 3.0, date(2026, 3, 1)));
        program.add_module(Module::new("open".to_string(), 5, None));
        program.add_module(completed("early", 1.0, date(2025, 11, 1)));

        let names: Vec<&str> = program
            .chronological_completions()
            .into_iter()
            .map(Module::name)
            .collect();
        assert_eq!(names, vec!["early", "late"]);

        // Storage order is unaffected
        assert_eq!(program.modules()[0].name(), "late");
    }

    #[test]
    fn test_chronological_completions_ties_keep_insertion_order() {
        let same_day = date(2026, 2, 1);
        let mut program = Program::new("B.Sc. KI".to_string(), 8, 180, date(2025, 9, 1));
        program.add_module(completed("first", 2.0, same_day));
        program.add_module(completed("second", 1.0, same_day));
        program.add_module(completed("third", 3.0, same_day));

        let names: Vec<&str> = program
            .chronological_completions()
            .into_iter()
            .map(Module::name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}

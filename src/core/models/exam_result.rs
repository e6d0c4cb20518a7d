//! Exam result model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The graded exam that closes out a module.
///
/// Grades follow the German scale: 1.0 is best, 4.0 is the lowest pass.
/// The value is immutable once created; replace it on the owning module instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    grade: f64,
    date: NaiveDate,
}

impl ExamResult {
    /// Create a new exam result
    ///
    /// # Arguments
    /// * `grade` - Grade between 1.0 and 4.0 (not validated here)
    /// * `date` - Date the exam was taken
    #[must_use]
    pub const fn new(grade: f64, date: NaiveDate) -> Self {
        Self { grade, date }
    }

    /// Grade achieved
    #[must_use]
    pub const fn grade(&self) -> f64 {
        self.grade
    }

    /// Exam date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

//! Module model

use super::{ExamResult, ModelError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a unit of study worth a fixed number of credits (ECTS)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    name: String,
    credits: u32,
    start_date: Option<NaiveDate>,
    exam_result: Option<ExamResult>,
}

impl Module {
    /// Create a new module without an exam result
    ///
    /// # Arguments
    /// * `name` - Module name (e.g., "Mathematik: Analysis")
    /// * `credits` - Credits awarded on completion
    /// * `start_date` - Day work on the module started, if known
    #[must_use]
    pub const fn new(name: String, credits: u32, start_date: Option<NaiveDate>) -> Self {
        Self {
            name,
            credits,
            start_date,
            exam_result: None,
        }
    }

    /// Module name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credits awarded on completion
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    /// Day work on the module started
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Attached exam result, if any
    #[must_use]
    pub const fn exam_result(&self) -> Option<&ExamResult> {
        self.exam_result.as_ref()
    }

    /// A module is completed iff it carries an exam result, regardless of the grade.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.exam_result.is_some()
    }

    /// Attach an exam result.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateExamResult`] if a result is already attached.
    pub fn set_exam_result(&mut self, exam: ExamResult) -> Result<(), ModelError> {
        if self.exam_result.is_some() {
            return Err(ModelError::DuplicateExamResult(self.name.clone()));
        }
        self.exam_result = Some(exam);
        Ok(())
    }

    /// Replace the exam result unconditionally, returning the previous one
    pub fn replace_exam_result(&mut self, exam: ExamResult) -> Option<ExamResult> {
        self.exam_result.replace(exam)
    }

    /// Remove the exam result, returning it if one was attached
    pub fn clear_exam_result(&mut self) -> Option<ExamResult> {
        self.exam_result.take()
    }

    /// Days between the module start and its exam.
    ///
    /// # Returns
    /// `None` when the start date or the exam is missing, or when the exam
    /// predates the start.
    #[must_use]
    pub fn days_required(&self) -> Option<i64> {
        let start = self.start_date?;
        let exam_date = self.exam_result.as_ref()?.date();
        if exam_date < start {
            return None;
        }
        Some((exam_date - start).num_days())
    }
}

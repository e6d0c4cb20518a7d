//! Data models for `StudyProgress`

pub mod exam_result;
pub mod module;
pub mod program;

pub use exam_result::ExamResult;
pub use module::Module;
pub use program::Program;

use thiserror::Error;

/// Errors raised by entity mutators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The module already carries an exam result
    #[error("module '{0}' already has an exam result")]
    DuplicateExamResult(String),
}

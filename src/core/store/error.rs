//! Store error types

use super::{ExamId, ModuleId, ProgramId};
use thiserror::Error;

/// Errors raised when validating or persisting catalog changes
#[derive(Debug, Error)]
pub enum StoreError {
    /// Grade outside 1.0–4.0
    #[error("invalid grade {0}: must be between 1.0 and 4.0")]
    InvalidGrade(f64),

    /// The module already has an exam result
    #[error("module {0} already has an exam result")]
    DuplicateExamResult(ModuleId),

    /// No module with this id
    #[error("module {0} not found")]
    UnknownModule(ModuleId),

    /// No program with this id
    #[error("program {0} not found")]
    UnknownProgram(ProgramId),

    /// No exam result with this id
    #[error("exam result {0} not found")]
    UnknownExam(ExamId),

    /// Name already taken
    #[error("{entity} named '{name}' already exists")]
    DuplicateName {
        /// "program" or "module"
        entity: &'static str,
        /// Conflicting name
        name: String,
    },

    /// Blank name
    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    /// Credits must be positive
    #[error("credits must be positive")]
    InvalidCredits,

    /// Semesters must be positive
    #[error("planned semesters must be positive")]
    InvalidSemesters,

    /// The module belongs to another program
    #[error("module {module} is already assigned to program {program}")]
    ModuleAlreadyAssigned {
        /// Module being assigned
        module: ModuleId,
        /// Program that owns it
        program: ProgramId,
    },

    /// Start date present and overriding was not requested
    #[error("module {0} already has a start date (use override to replace it)")]
    StartDateAlreadySet(ModuleId),

    /// Reading or writing the data file failed
    #[error("data file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not valid TOML for a catalog
    #[error("data file could not be parsed: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog could not be serialized
    #[error("data file could not be written: {0}")]
    Serialize(#[from] toml::ser::Error),
}

//! Persistence collaborators
//!
//! The metric engine only needs [`Store::load_program`]. Everything else here
//! (validated record keeping, the TOML data file, seed data) backs the CLI.

pub mod catalog;
pub mod error;
pub mod file;
pub mod seed;

pub use catalog::{Catalog, ExamRecord, ModuleRecord, ProgramRecord, Statistics};
pub use error::StoreError;
pub use file::FileStore;

use crate::core::models::Program;

/// Program identifier
pub type ProgramId = u32;

/// Module identifier
pub type ModuleId = u32;

/// Exam result identifier
pub type ExamId = u32;

/// Source of fully loaded programs
pub trait Store {
    /// Load a program with all its modules and exam results attached.
    ///
    /// Returns `None` if no program has this id.
    fn load_program(&self, id: ProgramId) -> Option<Program>;
}

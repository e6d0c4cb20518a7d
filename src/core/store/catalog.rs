//! In-memory record set backing the CLI
//!
//! Programs, modules and exam results are kept as flat records linked by id,
//! the way they are persisted. All input validation happens here so that a
//! [`Program`] handed to the metric engine is always structurally valid.

use super::{ExamId, ModuleId, ProgramId, Store, StoreError};
use crate::core::models::{ExamResult, Module, Program};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Lowest (best) grade on the German scale
pub const MIN_GRADE: f64 = 1.0;

/// Highest passing grade on the German scale
pub const MAX_GRADE: f64 = 4.0;

/// Stored program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramRecord {
    /// Identifier
    pub id: ProgramId,
    /// Unique program name
    pub name: String,
    /// Planned semesters
    pub planned_semesters: u32,
    /// Credit target
    pub total_credits: u32,
    /// First day of study
    pub start_date: NaiveDate,
}

/// Stored module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Identifier
    pub id: ModuleId,
    /// Unique module name
    pub name: String,
    /// Credits awarded on completion
    pub credits: u32,
    /// Day work on the module started
    pub start_date: Option<NaiveDate>,
    /// Owning program
    pub program_id: Option<ProgramId>,
}

/// Stored exam result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRecord {
    /// Identifier
    pub id: ExamId,
    /// Graded module
    pub module_id: ModuleId,
    /// Grade between 1.0 and 4.0
    pub grade: f64,
    /// Exam date
    pub date: NaiveDate,
}

/// Record counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of programs
    pub programs: usize,
    /// Number of modules
    pub modules: usize,
    /// Modules that have not been started
    pub modules_without_start: usize,
    /// Number of exam results
    pub exams: usize,
}

/// Validated collection of programs, modules and exam results.
///
/// Ids come from per-kind counters and are never reused, even after deletion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    next_program_id: ProgramId,
    #[serde(default)]
    next_module_id: ModuleId,
    #[serde(default)]
    next_exam_id: ExamId,
    #[serde(default)]
    programs: Vec<ProgramRecord>,
    #[serde(default)]
    modules: Vec<ModuleRecord>,
    #[serde(default)]
    exams: Vec<ExamRecord>,
}

fn validated_name(name: &str, entity: &'static str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyName(entity));
    }
    Ok(trimmed.to_string())
}

fn next_id(counter: &mut u32) -> u32 {
    *counter += 1;
    *counter
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a program.
    ///
    /// # Errors
    ///
    /// Fails on a blank or duplicate name, zero semesters or zero credits.
    pub fn create_program(
        &mut self,
        name: &str,
        planned_semesters: u32,
        total_credits: u32,
        start_date: NaiveDate,
    ) -> Result<ProgramId, StoreError> {
        let name = validated_name(name, "program")?;
        if self.programs.iter().any(|p| p.name == name) {
            return Err(StoreError::DuplicateName {
                entity: "program",
                name,
            });
        }
        if planned_semesters == 0 {
            return Err(StoreError::InvalidSemesters);
        }
        if total_credits == 0 {
            return Err(StoreError::InvalidCredits);
        }

        let id = next_id(&mut self.next_program_id);
        info!(program_id = id, %name, "program created");
        self.programs.push(ProgramRecord {
            id,
            name,
            planned_semesters,
            total_credits,
            start_date,
        });
        Ok(id)
    }

    /// Add a module, optionally assigning it to a program right away.
    ///
    /// # Errors
    ///
    /// Fails on a blank or duplicate name, zero credits or an unknown program.
    pub fn create_module(
        &mut self,
        name: &str,
        credits: u32,
        start_date: Option<NaiveDate>,
        program_id: Option<ProgramId>,
    ) -> Result<ModuleId, StoreError> {
        let name = validated_name(name, "module")?;
        if self.modules.iter().any(|m| m.name == name) {
            return Err(StoreError::DuplicateName {
                entity: "module",
                name,
            });
        }
        if credits == 0 {
            return Err(StoreError::InvalidCredits);
        }
        if let Some(program_id) = program_id {
            self.program(program_id)?;
        }

        let id = next_id(&mut self.next_module_id);
        info!(module_id = id, %name, credits, "module created");
        self.modules.push(ModuleRecord {
            id,
            name,
            credits,
            start_date,
            program_id,
        });
        Ok(id)
    }

    /// Assign an existing module to a program.
    ///
    /// Assigning a module to the program it already belongs to is a no-op.
    ///
    /// # Errors
    ///
    /// Fails if either id is unknown or the module belongs to another program.
    pub fn assign_module(
        &mut self,
        program_id: ProgramId,
        module_id: ModuleId,
    ) -> Result<(), StoreError> {
        self.program(program_id)?;
        let module = self.module_mut(module_id)?;
        match module.program_id {
            Some(current) if current == program_id => Ok(()),
            Some(current) => Err(StoreError::ModuleAlreadyAssigned {
                module: module_id,
                program: current,
            }),
            None => {
                module.program_id = Some(program_id);
                info!(program_id, module_id, "module assigned");
                Ok(())
            }
        }
    }

    /// Record the exam result that completes a module.
    ///
    /// # Errors
    ///
    /// Fails on a grade outside 1.0–4.0, an unknown module, or a module that
    /// already has a result.
    pub fn record_exam(
        &mut self,
        module_id: ModuleId,
        grade: f64,
        date: NaiveDate,
    ) -> Result<ExamId, StoreError> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(StoreError::InvalidGrade(grade));
        }
        self.module(module_id)?;
        if self.exam_for_module(module_id).is_some() {
            return Err(StoreError::DuplicateExamResult(module_id));
        }

        let id = next_id(&mut self.next_exam_id);
        info!(exam_id = id, module_id, grade, %date, "exam result recorded");
        self.exams.push(ExamRecord {
            id,
            module_id,
            grade,
            date,
        });
        Ok(id)
    }

    /// Set the start date of a module.
    ///
    /// # Errors
    ///
    /// Fails on an unknown module, or when a start date is already present
    /// and `override_existing` is false.
    pub fn set_module_start(
        &mut self,
        module_id: ModuleId,
        start_date: NaiveDate,
        override_existing: bool,
    ) -> Result<(), StoreError> {
        let module = self.module_mut(module_id)?;
        if module.start_date.is_some() && !override_existing {
            return Err(StoreError::StartDateAlreadySet(module_id));
        }
        module.start_date = Some(start_date);
        info!(module_id, %start_date, "module started");
        Ok(())
    }

    /// Delete a program. Its modules stay in the catalog, unassigned.
    ///
    /// # Errors
    ///
    /// Fails if the program is unknown.
    pub fn delete_program(&mut self, program_id: ProgramId) -> Result<ProgramRecord, StoreError> {
        let pos = self
            .programs
            .iter()
            .position(|p| p.id == program_id)
            .ok_or(StoreError::UnknownProgram(program_id))?;
        for module in &mut self.modules {
            if module.program_id == Some(program_id) {
                module.program_id = None;
            }
        }
        info!(program_id, "program deleted");
        Ok(self.programs.remove(pos))
    }

    /// Delete a module together with its exam result.
    ///
    /// # Errors
    ///
    /// Fails if the module is unknown.
    pub fn delete_module(&mut self, module_id: ModuleId) -> Result<ModuleRecord, StoreError> {
        let pos = self
            .modules
            .iter()
            .position(|m| m.id == module_id)
            .ok_or(StoreError::UnknownModule(module_id))?;
        let before = self.exams.len();
        self.exams.retain(|e| e.module_id != module_id);
        debug!(
            module_id,
            exams_removed = before - self.exams.len(),
            "module deleted"
        );
        Ok(self.modules.remove(pos))
    }

    /// Delete an exam result, reopening its module.
    ///
    /// # Errors
    ///
    /// Fails if the exam result is unknown.
    pub fn delete_exam(&mut self, exam_id: ExamId) -> Result<ExamRecord, StoreError> {
        let pos = self
            .exams
            .iter()
            .position(|e| e.id == exam_id)
            .ok_or(StoreError::UnknownExam(exam_id))?;
        info!(exam_id, "exam result deleted");
        Ok(self.exams.remove(pos))
    }

    /// All programs in creation order
    #[must_use]
    pub fn programs(&self) -> &[ProgramRecord] {
        &self.programs
    }

    /// Modules in creation order, optionally restricted to one program
    #[must_use]
    pub fn modules(&self, program_id: Option<ProgramId>) -> Vec<&ModuleRecord> {
        self.modules
            .iter()
            .filter(|m| program_id.is_none() || m.program_id == program_id)
            .collect()
    }

    /// Exam results ordered by date, optionally restricted to one module
    #[must_use]
    pub fn exams(&self, module_id: Option<ModuleId>) -> Vec<&ExamRecord> {
        let mut exams: Vec<&ExamRecord> = self
            .exams
            .iter()
            .filter(|e| module_id.is_none() || Some(e.module_id) == module_id)
            .collect();
        exams.sort_by_key(|e| e.date);
        exams
    }

    /// Exam result of a module, if recorded
    #[must_use]
    pub fn exam_for_module(&self, module_id: ModuleId) -> Option<&ExamRecord> {
        self.exams.iter().find(|e| e.module_id == module_id)
    }

    /// Look up a program record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProgram`] if absent.
    pub fn program(&self, program_id: ProgramId) -> Result<&ProgramRecord, StoreError> {
        self.programs
            .iter()
            .find(|p| p.id == program_id)
            .ok_or(StoreError::UnknownProgram(program_id))
    }

    /// Look up a module record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownModule`] if absent.
    pub fn module(&self, module_id: ModuleId) -> Result<&ModuleRecord, StoreError> {
        self.modules
            .iter()
            .find(|m| m.id == module_id)
            .ok_or(StoreError::UnknownModule(module_id))
    }

    fn module_mut(&mut self, module_id: ModuleId) -> Result<&mut ModuleRecord, StoreError> {
        self.modules
            .iter_mut()
            .find(|m| m.id == module_id)
            .ok_or(StoreError::UnknownModule(module_id))
    }

    /// Record counts
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics {
            programs: self.programs.len(),
            modules: self.modules.len(),
            modules_without_start: self
                .modules
                .iter()
                .filter(|m| m.start_date.is_none())
                .count(),
            exams: self.exams.len(),
        }
    }
}

impl Store for Catalog {
    fn load_program(&self, id: ProgramId) -> Option<Program> {
        let record = self.program(id).ok()?;
        let mut program = Program::new(
            record.name.clone(),
            record.planned_semesters,
            record.total_credits,
            record.start_date,
        );

        for module_record in self.modules(Some(id)) {
            let mut module = Module::new(
                module_record.name.clone(),
                module_record.credits,
                module_record.start_date,
            );
            // A hand-edited data file may carry several results for one module
            for exam in self.exams.iter().filter(|e| e.module_id == module_record.id) {
                if let Err(err) = module.set_exam_result(ExamResult::new(exam.grade, exam.date)) {
                    warn!(exam_id = exam.id, %err, "ignoring extra exam result");
                }
            }
            program.add_module(module);
        }

        debug!(
            program_id = id,
            modules = program.modules().len(),
            "program loaded"
        );
        Some(program)
    }
}

//! Exam result commands

use super::save_store;
use anyhow::Result;
use chrono::NaiveDate;
use study_progress::store::{ExamId, FileStore, ModuleId};

/// Record an exam result
pub fn add(store: &mut FileStore, module_id: ModuleId, grade: f64, date: NaiveDate) -> Result<()> {
    let id = store.catalog_mut().record_exam(module_id, grade, date)?;
    save_store(store)?;
    println!("✓ Exam result recorded (id: {id})");
    Ok(())
}

/// Delete an exam result
pub fn delete(store: &mut FileStore, exam_id: ExamId) -> Result<()> {
    store.catalog_mut().delete_exam(exam_id)?;
    save_store(store)?;
    println!("✓ Exam result {exam_id} deleted");
    Ok(())
}

/// Print exam results by date, optionally only that of one module
pub fn list(store: &FileStore, module_id: Option<ModuleId>) {
    match module_id {
        Some(id) => println!("\nExam results of module {id}:"),
        None => println!("\nExam results:"),
    }

    let exams = store.catalog().exams(module_id);
    if exams.is_empty() {
        println!("No exam results recorded.");
        return;
    }
    for exam in exams {
        println!(
            "ID: {:>3} | Module: {:>3} | Grade: {:.1} | Date: {}",
            exam.id, exam.module_id, exam.grade, exam.date
        );
    }
}

//! Program commands

use super::save_store;
use anyhow::Result;
use chrono::NaiveDate;
use study_progress::store::{FileStore, ModuleId, ProgramId};

/// Create a program and print its id
pub fn create(
    store: &mut FileStore,
    name: &str,
    planned_semesters: u32,
    total_credits: u32,
    start_date: NaiveDate,
) -> Result<()> {
    let id = store
        .catalog_mut()
        .create_program(name, planned_semesters, total_credits, start_date)?;
    save_store(store)?;
    println!("✓ Program created (id: {id})");
    Ok(())
}

/// Assign a module to a program
pub fn assign(store: &mut FileStore, program_id: ProgramId, module_id: ModuleId) -> Result<()> {
    store.catalog_mut().assign_module(program_id, module_id)?;
    save_store(store)?;
    println!("✓ Module {module_id} assigned to program {program_id}");
    Ok(())
}

/// Delete a program, leaving its modules unassigned
pub fn delete(store: &mut FileStore, program_id: ProgramId) -> Result<()> {
    let removed = store.catalog_mut().delete_program(program_id)?;
    save_store(store)?;
    println!("✓ Program {program_id} deleted ({})", removed.name);
    Ok(())
}

/// Print every program
pub fn list(store: &FileStore) {
    let programs = store.catalog().programs();
    println!("\nPrograms:");
    if programs.is_empty() {
        println!("No programs found. Run 'studyprogress setup' for the sample program.");
        return;
    }
    for program in programs {
        println!("ID: {:>2} | {}", program.id, program.name);
        println!("  Start: {}", program.start_date);
        println!(
            "  {} semesters | {} ECTS",
            program.planned_semesters, program.total_credits
        );
    }
}

//! Module commands

use super::save_store;
use anyhow::Result;
use chrono::NaiveDate;
use study_progress::store::{Catalog, FileStore, ModuleId, ModuleRecord, ProgramId};

/// Create a module, optionally assigned to a program
pub fn create(
    store: &mut FileStore,
    name: &str,
    credits: u32,
    start_date: Option<NaiveDate>,
    program_id: Option<ProgramId>,
) -> Result<()> {
    let id = store
        .catalog_mut()
        .create_module(name, credits, start_date, program_id)?;
    save_store(store)?;
    println!("✓ Module created (id: {id})");
    if let Some(program_id) = program_id {
        println!("✓ Module {id} assigned to program {program_id}");
    }
    Ok(())
}

/// Set the start date of a module
pub fn start(
    store: &mut FileStore,
    module_id: ModuleId,
    date: NaiveDate,
    override_existing: bool,
) -> Result<()> {
    store
        .catalog_mut()
        .set_module_start(module_id, date, override_existing)?;
    save_store(store)?;
    println!("✓ Start date of module {module_id} set to {date}");
    Ok(())
}

/// Delete a module and its exam result
pub fn delete(store: &mut FileStore, module_id: ModuleId) -> Result<()> {
    let removed = store.catalog_mut().delete_module(module_id)?;
    save_store(store)?;
    println!("✓ Module {module_id} deleted ({})", removed.name);
    Ok(())
}

/// Print modules, optionally only those of one program
pub fn list(store: &FileStore, program_id: Option<ProgramId>) {
    let catalog = store.catalog();
    match program_id {
        Some(id) => println!("\nModules of program {id}:"),
        None => println!("\nModules:"),
    }

    let modules = catalog.modules(program_id);
    if modules.is_empty() {
        println!("No modules found.");
        return;
    }
    for module in modules {
        println!(
            "ID: {:>3} | {} [{} ECTS]{}",
            module.id,
            module.name,
            module.credits,
            status(catalog, module)
        );
    }
}

/// Start date, grade and exam date in parentheses, or nothing
fn status(catalog: &Catalog, module: &ModuleRecord) -> String {
    let mut parts = Vec::new();
    if let Some(start) = module.start_date {
        parts.push(format!("start: {start}"));
    }
    if let Some(exam) = catalog.exam_for_module(module.id) {
        parts.push(format!("grade: {:.1}", exam.grade));
        parts.push(format!("exam: {}", exam.date));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

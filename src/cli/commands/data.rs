//! Data file lifecycle: init, setup, reset and statistics

use super::{confirm, save_store};
use anyhow::{Context, Result};
use study_progress::store::{seed, FileStore};

/// Write an empty data file unless one exists
pub fn init(store: &FileStore) -> Result<()> {
    if store.path().exists() {
        println!("✓ Data file already present: {}", store.path().display());
        return Ok(());
    }
    save_store(store)?;
    println!("✓ Data file created: {}", store.path().display());
    Ok(())
}

/// Create the sample program
pub fn setup(store: &mut FileStore) -> Result<()> {
    let program_id = seed::create_default_program(store.catalog_mut())
        .context("setup failed")?;
    save_store(store)?;
    println!("✓ Setup complete (program id: {program_id})");
    Ok(())
}

/// Drop every record, asking first unless `yes` is set
pub fn reset(store: &mut FileStore, yes: bool) -> Result<()> {
    if !yes && !confirm("Really delete all programs, modules and exam results?") {
        println!("✗ Reset cancelled");
        return Ok(());
    }
    store
        .reset()
        .with_context(|| format!("failed to reset {}", store.path().display()))?;
    println!("✓ Data reset");
    Ok(())
}

/// Print record counts
pub fn stats(store: &FileStore) {
    let stats = store.catalog().statistics();
    println!("\n=== Statistics ===\n");
    println!("Programs:                {}", stats.programs);
    println!("Modules:                 {}", stats.modules);
    println!("Modules without start:   {}", stats.modules_without_start);
    println!("Exam results:            {}", stats.exams);
}

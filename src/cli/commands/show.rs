//! Dashboard command handler

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use study_progress::config::Config;
use study_progress::dashboard::build_dashboard;
use study_progress::report::{report_file_name, reporter_for, ReportFormat};
use study_progress::store::{FileStore, ProgramId};

/// Render the dashboard of a program
///
/// # Arguments
/// * `output` - `None` prints to stdout; `Some(None)` writes into the
///   configured reports directory; `Some(Some(dir))` writes into `dir`
pub fn run(
    store: &FileStore,
    config: &Config,
    program_id: ProgramId,
    format: ReportFormat,
    today: NaiveDate,
    output: Option<Option<PathBuf>>,
) -> Result<()> {
    let Some(snapshot) = build_dashboard(store, program_id, today) else {
        bail!("program {program_id} not found (see 'studyprogress list')");
    };
    let reporter = reporter_for(format);

    let Some(dir) = output else {
        let content = reporter
            .render(&snapshot)
            .map_err(|e| anyhow!("failed to render report: {e}"))?;
        print!("{content}");
        return Ok(());
    };

    let dir = match dir {
        Some(dir) => dir,
        None if config.paths.reports_dir.is_empty() => {
            bail!("no reports directory configured (set `reports_dir` or pass a directory)")
        }
        None => PathBuf::from(&config.paths.reports_dir),
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create reports directory {}", dir.display()))?;

    let path = dir.join(report_file_name(&snapshot, format));
    reporter
        .generate(&snapshot, &path)
        .map_err(|e| anyhow!("failed to write {}: {e}", path.display()))?;
    println!("✓ Report generated: {}", path.display());
    Ok(())
}

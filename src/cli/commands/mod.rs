//! CLI command handlers for `StudyProgress`.
//!
//! Each command family is implemented in its own submodule. Handlers return
//! `anyhow::Result`; `main` prints the error chain and sets the exit code.

pub mod config;
pub mod data;
pub mod exam;
pub mod module;
pub mod program;
pub mod show;

use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use study_progress::config::Config;
use study_progress::store::FileStore;

/// Open the configured data file
pub fn open_store(config: &Config) -> Result<FileStore> {
    if config.paths.data_file.is_empty() {
        bail!("no data file configured (set `data_file` or pass --data-file)");
    }
    let path = PathBuf::from(&config.paths.data_file);
    FileStore::open(&path).with_context(|| format!("failed to open {}", path.display()))
}

/// Persist the store, attaching the path to any error
pub fn save_store(store: &FileStore) -> Result<()> {
    store
        .save()
        .with_context(|| format!("failed to save {}", store.path().display()))
}

/// Ask a yes/no question on stdin
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

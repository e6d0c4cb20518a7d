//! TOML-backed catalog persistence

use super::{Catalog, ProgramId, Store, StoreError};
use crate::core::models::Program;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A [`Catalog`] loaded from and saved to a TOML data file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    catalog: Catalog,
}

impl FileStore {
    /// Open the data file at `path`.
    ///
    /// A missing file yields an empty catalog; nothing is written until
    /// [`save`](Self::save) is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let catalog = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let catalog: Catalog = toml::from_str(&content)?;
            debug!(path = %path.display(), "data file loaded");
            catalog
        } else {
            debug!(path = %path.display(), "data file missing, starting empty");
            Catalog::new()
        };
        Ok(Self { path, catalog })
    }

    /// Path of the data file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loaded catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Loaded catalog for modification; call [`save`](Self::save) to persist
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Write the catalog to the data file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let toml_str = toml::to_string_pretty(&self.catalog)?;
        fs::write(&self.path, toml_str)?;
        debug!(path = %self.path.display(), "data file saved");
        Ok(())
    }

    /// Drop every record and write the empty catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.catalog = Catalog::new();
        self.save()?;
        info!(path = %self.path.display(), "data file reset");
        Ok(())
    }
}

impl Store for FileStore {
    fn load_program(&self, id: ProgramId) -> Option<Program> {
        self.catalog.load_program(id)
    }
}

//! File-based catalog source.

use crate::model::error::InputError;
use crate::parser::{parse_catalog, ParsedCatalog};
use std::path::{Path, PathBuf};
use tracing::info;

/// Catalog stored in a JSONL file. Read once.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the file cannot be read.
    pub fn load(self) -> Result<ParsedCatalog, InputError> {
        let contents = std::fs::read_to_string(&self.path)?;
        let catalog = parse_catalog(contents.lines());
        info!(
            path = %self.path.display(),
            items = catalog.items.len(),
            rejected = catalog.errors.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

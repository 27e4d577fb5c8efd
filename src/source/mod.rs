//! Catalog input sources.
//!
//! This module provides input sources for JSONL item catalogs:
//! - File loading for a catalog on disk
//! - Stdin for a piped catalog
//! - Unified CatalogSource enum for both

use crate::model::error::InputError;
use crate::parser::ParsedCatalog;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for catalog data.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum CatalogSource {
    /// Catalog file on disk.
    File(FileSource),
    /// Catalog piped on stdin.
    Stdin(StdinSource<std::io::Stdin>),
}

impl CatalogSource {
    /// Read and parse the whole catalog.
    ///
    /// Malformed lines are logged and returned in [`ParsedCatalog::errors`].
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn load(self) -> Result<ParsedCatalog, InputError> {
        match self {
            CatalogSource::File(f) => f.load(),
            CatalogSource::Stdin(s) => s.load(),
        }
    }

    /// Human-readable origin for logs and the header line.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::File(f) => f.path().display().to_string(),
            CatalogSource::Stdin(_) => "<stdin>".to_string(),
        }
    }
}

/// Detect and create the appropriate catalog source.
///
/// # Logic:
/// 1. If a file path is provided: FileSource (must exist)
/// 2. Else if stdin is piped: StdinSource
/// 3. Else: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist, or
/// `InputError::NoInput` if there is no file and stdin is a terminal.
pub fn detect_catalog_source(file: Option<PathBuf>) -> Result<CatalogSource, InputError> {
    match file {
        Some(path) => Ok(CatalogSource::File(FileSource::new(path)?)),
        None => Ok(CatalogSource::Stdin(StdinSource::new()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn detect_with_missing_file_is_not_found() {
        let result = detect_catalog_source(Some(PathBuf::from(
            "/nonexistent/loopreel/catalog.jsonl",
        )));
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn file_source_loads_all_items() {
        let path = std::env::temp_dir().join("loopreel_source_detect.jsonl");
        fs::write(&path, "{\"title\":\"One\"}\n{\"title\":\"Two\"}\n").unwrap();

        let source = detect_catalog_source(Some(path.clone())).unwrap();
        assert!(source.describe().ends_with("loopreel_source_detect.jsonl"));
        let catalog = source.load().unwrap();

        let _ = fs::remove_file(&path);

        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.items[0].title, "One");
        assert!(catalog.errors.is_empty());
    }
}

//! Stdin-based catalog source for piped input.

use crate::model::error::InputError;
use crate::parser::{parse_catalog, ParsedCatalog};
use std::io::{IsTerminal, Read};
use tracing::info;

/// Catalog piped on stdin, e.g. `cat catalog.jsonl | loopreel`.
///
/// Reads to EOF on load. Keyboard input for the TUI comes from the
/// controlling terminal, not stdin.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY, which means the user
    /// forgot to pipe a catalog.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader (bypasses the TTY check).
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read everything and parse it.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures, including invalid UTF-8.
    pub fn load(mut self) -> Result<ParsedCatalog, InputError> {
        let mut contents = String::new();
        self.reader.read_to_string(&mut contents)?;
        let catalog = parse_catalog(contents.lines());
        info!(
            items = catalog.items.len(),
            rejected = catalog.errors.len(),
            "Catalog loaded from stdin"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_parses_piped_lines() {
        let data = b"{\"title\":\"A\"}\n{\"title\":\"B\",\"caption\":\"c\"}\n";
        let catalog = StdinSource::from_reader(&data[..]).load().unwrap();
        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.items[1].caption.as_deref(), Some("c"));
    }

    #[test]
    fn empty_input_is_empty_catalog() {
        let data = b"";
        let catalog = StdinSource::from_reader(&data[..]).load().unwrap();
        assert!(catalog.items.is_empty());
        assert!(catalog.errors.is_empty());
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let data = [0xff, 0xfe, b'\n'];
        let err = StdinSource::from_reader(&data[..]).load().unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}

//! Error types for loopreel.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose cleanly via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Catalog file/stdin reading failures (file not found, no input, IO)
//!   - [`ParseError`] - Catalog line failures (malformed JSON, empty title)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures and out-of-range settings
//!   - [`PromoError`](crate::promo::PromoError) - Promo expiry persistence failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Catalog parse errors are **non-fatal**: malformed lines are logged and skipped, so the
//! carousel still shows every valid item. Input and terminal errors are fatal and
//! propagate to `main`. Promo persistence errors are logged and the countdown keeps
//! running from memory.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use loopreel::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_catalog()?;
///     Ok(())
/// }
/// # fn read_catalog() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the item catalog from file or stdin.
    ///
    /// **Recovery**: Display error to user and exit. Without items there is nothing to show.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to parse a catalog line.
    ///
    /// Surfaced only when a caller chooses to treat parse failures as fatal; the loader
    /// itself logs and skips them.
    #[error("Failed to parse catalog entry: {0}")]
    Parse(#[from] ParseError),

    /// Configuration file could not be read or parsed, or a setting is out of range.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Promo expiry could not be loaded or persisted.
    #[error("Promo countdown error: {0}")]
    Promo(#[from] crate::promo::PromoError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt graceful terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when reading the catalog from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified catalog file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use loopreel::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided: no file argument and stdin is a terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopreel::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing one catalog line.
///
/// All variants carry the 1-based line number so the log points at the offending line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is not a valid item descriptor object.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number.
        line: usize,
        /// Parser error message from `serde_json`.
        message: String,
    },

    /// The descriptor has an empty (or whitespace-only) title.
    #[error("Empty title at line {line}")]
    EmptyTitle {
        /// 1-based line number.
        line: usize,
    },

    /// The descriptor declares a zero width.
    #[error("Zero width at line {line}")]
    ZeroWidth {
        /// 1-based line number.
        line: usize,
    },
}

impl ParseError {
    /// Line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidJson { line, .. }
            | ParseError::EmptyTitle { line }
            | ParseError::ZeroWidth { line } => *line,
        }
    }
}

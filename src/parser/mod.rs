//! JSONL parser for catalog item descriptors.
//!
//! Pure parsing functions converting catalog lines into validated
//! [`ItemDescriptor`]s. Malformed lines are reported, never fatal.

use crate::model::{ItemDescriptor, ParseError};
use tracing::warn;

/// Parse one catalog line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
///
/// # Errors
///
/// Returns `ParseError` for invalid JSON, an empty title, or a zero width.
pub fn parse_item_line(raw: &str, line: usize) -> Result<Option<ItemDescriptor>, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let item: ItemDescriptor =
        serde_json::from_str(trimmed).map_err(|e| ParseError::InvalidJson {
            line,
            message: e.to_string(),
        })?;

    if item.title.trim().is_empty() {
        return Err(ParseError::EmptyTitle { line });
    }
    if item.width == Some(0) {
        return Err(ParseError::ZeroWidth { line });
    }

    Ok(Some(item))
}

/// Items and rejected lines from one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCatalog {
    /// Valid items in file order.
    pub items: Vec<ItemDescriptor>,
    /// Lines that failed to parse.
    pub errors: Vec<ParseError>,
}

/// Parse a whole catalog, logging and skipping malformed lines.
pub fn parse_catalog<'a>(lines: impl IntoIterator<Item = &'a str>) -> ParsedCatalog {
    let mut catalog = ParsedCatalog::default();

    for (idx, raw) in lines.into_iter().enumerate() {
        match parse_item_line(raw, idx + 1) {
            Ok(Some(item)) => catalog.items.push(item),
            Ok(None) => {}
            Err(err) => {
                warn!("Skipping catalog line: {}", err);
                catalog.errors.push(err);
            }
        }
    }

    catalog
}

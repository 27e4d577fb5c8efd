//! Catalog item descriptors.

use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

/// Horizontal padding added to measured content: two border cells plus one
/// blank cell on each side.
pub const CARD_PADDING: u16 = 4;

/// One display item in the carousel.
///
/// Deserialized from one catalog line:
///
/// ```json
/// {"title": "Starter", "caption": "1 hour setup", "width": 24}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDescriptor {
    /// Headline shown on the card.
    pub title: String,

    /// Optional second line.
    #[serde(default)]
    pub caption: Option<String>,

    /// Explicit card width in cells, overriding measurement.
    #[serde(default)]
    pub width: Option<u16>,
}

impl ItemDescriptor {
    /// Item with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: None,
            width: None,
        }
    }

    /// Builder: add a caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Builder: pin the card width.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Rendered card width in terminal cells.
    ///
    /// Explicit width wins; otherwise the widest text line plus [`CARD_PADDING`].
    pub fn measured_width(&self) -> u16 {
        if let Some(width) = self.width {
            return width;
        }
        let title = self.title.width();
        let caption = self.caption.as_deref().map_or(0, UnicodeWidthStr::width);
        let content = u16::try_from(title.max(caption)).unwrap_or(u16::MAX);
        content.saturating_add(CARD_PADDING)
    }
}

/// Uniform card width for a catalog: the widest measured item, 0 when empty.
pub fn uniform_item_width(items: &[ItemDescriptor]) -> u16 {
    items
        .iter()
        .map(ItemDescriptor::measured_width)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_width_uses_widest_line() {
        let item = ItemDescriptor::new("Pro").with_caption("Monthly plan");
        assert_eq!(item.measured_width(), 12 + CARD_PADDING);
    }

    #[test]
    fn explicit_width_wins() {
        let item = ItemDescriptor::new("A very long headline").with_width(10);
        assert_eq!(item.measured_width(), 10);
    }

    #[test]
    fn wide_characters_count_double() {
        let item = ItemDescriptor::new("日本");
        assert_eq!(item.measured_width(), 4 + CARD_PADDING);
    }

    #[test]
    fn uniform_width_is_max() {
        let items = vec![
            ItemDescriptor::new("ab"),
            ItemDescriptor::new("abcdef"),
            ItemDescriptor::new("abc"),
        ];
        assert_eq!(uniform_item_width(&items), 6 + CARD_PADDING);
        assert_eq!(uniform_item_width(&[]), 0);
    }

    #[test]
    fn deserializes_optional_fields() {
        let item: ItemDescriptor = serde_json::from_str(r#"{"title":"Basic"}"#).unwrap();
        assert_eq!(item, ItemDescriptor::new("Basic"));

        let item: ItemDescriptor =
            serde_json::from_str(r#"{"title":"Pro","caption":"x","width":30}"#).unwrap();
        assert_eq!(item.caption.as_deref(), Some("x"));
        assert_eq!(item.width, Some(30));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<ItemDescriptor, _> =
            serde_json::from_str(r#"{"title":"Pro","price":5}"#);
        assert!(result.is_err());
    }
}

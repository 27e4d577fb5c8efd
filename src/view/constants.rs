//! Layout dimension and timing constants for TUI rendering.

use std::time::Duration;

/// Height of a card in lines (border + title + caption + blank + border).
pub const CARD_HEIGHT: u16 = 5;

/// Width of each prev/next button column.
pub const BUTTON_WIDTH: u16 = 3;

/// Height of the header line.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the indicator dot row.
pub const INDICATOR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Redraw interval while the track is animating (about 60fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Longest sleep between redraws when nothing is scheduled. Keeps the promo
/// countdown ticking once per second.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Active indicator glyph.
pub const DOT_ACTIVE: &str = "●";

/// Inactive indicator glyph.
pub const DOT_INACTIVE: &str = "○";

//! Screen layout for the carousel.
//!
//! Pure geometry: the same [`CarouselLayout`] drives rendering and mouse hit
//! testing, so clicks always land on what was drawn.

use crate::view::constants::{
    BUTTON_WIDTH, CARD_HEIGHT, HEADER_HEIGHT, INDICATOR_HEIGHT, STATUS_BAR_HEIGHT,
};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    /// Title line.
    pub header: Rect,
    /// "Previous" button column.
    pub prev_button: Rect,
    /// Visible window of the card strip.
    pub track: Rect,
    /// "Next" button column.
    pub next_button: Rect,
    /// Indicator dot row.
    pub indicators: Rect,
    /// Bottom status line.
    pub status: Rect,
}

/// What a screen position hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Previous button.
    Previous,
    /// Next button.
    Next,
    /// The card strip.
    Track,
    /// The indicator row (dot resolution happens separately).
    Indicators,
    /// Anything else.
    Nothing,
}

impl CarouselLayout {
    /// Split `area` into carousel regions.
    ///
    /// ```text
    /// header
    /// (spacer)
    /// [<] track [>]
    /// dots
    /// (filler)
    /// status
    /// ```
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CARD_HEIGHT),
                Constraint::Length(INDICATOR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        let track_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Min(0),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .split(rows[2]);

        Self {
            header: rows[0],
            prev_button: track_row[0],
            track: track_row[1],
            next_button: track_row[2],
            indicators: rows[3],
            status: rows[5],
        }
    }

    /// Region under the cell at (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        let position = Position::new(column, row);
        if self.prev_button.contains(position) {
            HitTarget::Previous
        } else if self.next_button.contains(position) {
            HitTarget::Next
        } else if self.track.contains(position) {
            HitTarget::Track
        } else if self.indicators.contains(position) {
            HitTarget::Indicators
        } else {
            HitTarget::Nothing
        }
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;

//! Card strip widget.
//!
//! Draws the visible window of the track buffer. Cards are rendered whole into
//! a scratch buffer and then copied column by column, so cards cut by the
//! window edges are clipped rather than squashed.

use crate::carousel::{TrackBuffer, TrackGeometry};
use crate::model::ItemDescriptor;
use crate::view::constants::CARD_HEIGHT;
use crate::view::styles::CarouselStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Clones per side needed so a window `window_width` columns wide, centred on
/// a card `card_width` wide, never shows past either end of the track.
///
/// The active card's left edge sits `(window_width - card_width) / 2` columns
/// from the window edge, and a wrap step rests one slot further out, hence the
/// extra slot. Never less than `minimum`.
pub fn required_clone_count(
    window_width: u16,
    card_width: u16,
    stride: f64,
    minimum: usize,
) -> usize {
    if !stride.is_finite() || stride <= 0.0 {
        return minimum;
    }
    let center_shift = f64::from(window_width.saturating_sub(card_width)) / 2.0;
    let needed = (center_shift / stride).ceil().min(f64::from(u16::MAX)) as usize + 1;
    minimum.max(needed)
}

/// The horizontally scrolling row of cards.
///
/// `offset` is the left edge of the viewport in track columns. The slot at
/// `offset` is drawn centered in the window, with neighbours (real or clone)
/// filling the space on both sides.
#[derive(Debug, Clone, Copy)]
pub struct TrackStrip<'a> {
    items: &'a [ItemDescriptor],
    track: &'a TrackBuffer,
    geometry: TrackGeometry,
    item_width: u16,
    offset: f64,
    active_item: usize,
    styles: &'a CarouselStyles,
}

impl<'a> TrackStrip<'a> {
    /// Strip over `track`, whose slots index into `items`.
    pub fn new(
        items: &'a [ItemDescriptor],
        track: &'a TrackBuffer,
        geometry: TrackGeometry,
        item_width: u16,
        styles: &'a CarouselStyles,
    ) -> Self {
        Self {
            items,
            track,
            geometry,
            item_width,
            offset: 0.0,
            active_item: 0,
            styles,
        }
    }

    /// Viewport offset to draw at.
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Item whose cards are highlighted.
    pub fn active_item(mut self, item: usize) -> Self {
        self.active_item = item;
        self
    }

    /// Column of `slot`'s left edge relative to a window `window_width` wide.
    /// May be negative or beyond the window.
    pub fn card_column(&self, slot: usize, window_width: u16) -> i64 {
        let center_shift = (f64::from(window_width) - f64::from(self.item_width)) / 2.0;
        (self.geometry.offset_of_slot(slot) - self.offset + center_shift).round() as i64
    }

    fn render_card(&self, item: &ItemDescriptor, active: bool) -> Buffer {
        let area = Rect::new(0, 0, self.item_width, CARD_HEIGHT);
        let mut scratch = Buffer::empty(area);

        let border_style = if active {
            self.styles.active_card
        } else {
            self.styles.card
        };
        let block = Block::bordered().border_style(border_style);

        let mut lines = vec![Line::from(Span::styled(item.title.as_str(), border_style))];
        if let Some(caption) = item.caption.as_deref() {
            lines.push(Line::from(Span::styled(caption, self.styles.caption)));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, &mut scratch);
        scratch
    }
}

impl Widget for TrackStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.item_width == 0 {
            return;
        }
        let window = i64::from(area.width);
        let card_width = i64::from(self.item_width);
        let height = area.height.min(CARD_HEIGHT);

        for (position, slot) in self.track.slots().iter().enumerate() {
            let left = self.card_column(position, area.width);
            if left + card_width <= 0 || left >= window {
                continue;
            }
            let Some(item) = self.items.get(slot.item) else {
                continue;
            };

            let card = self.render_card(item, slot.item == self.active_item);

            for dx in 0..self.item_width {
                let column = left + i64::from(dx);
                if !(0..window).contains(&column) {
                    continue;
                }
                // Lossless: 0 <= column < area.width
                let x = area.x + column as u16;
                for dy in 0..height {
                    if let (Some(src), Some(dst)) =
                        (card.cell((dx, dy)), buf.cell_mut((x, area.y + dy)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

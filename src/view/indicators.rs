//! Indicator dot row.

use crate::carousel::Indicator;
use crate::view::constants::{DOT_ACTIVE, DOT_INACTIVE};
use crate::view::styles::CarouselStyles;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Columns (absolute) of each drawable dot, centered in `area`.
///
/// Dots are one column wide with one column of spacing. Dots that do not fit
/// are dropped from the end.
pub fn dot_columns(area: Rect, count: usize) -> Vec<u16> {
    if count == 0 || area.width == 0 {
        return Vec::new();
    }
    let fit = usize::from(area.width).div_ceil(2).min(count);
    // fit <= area.width, so these stay within u16
    let span = (fit * 2 - 1) as u16;
    let start = area.x + (area.width - span) / 2;
    (0..fit as u16).map(|i| start + i * 2).collect()
}

/// Item whose dot is at `column`, if any.
pub fn indicator_at(area: Rect, count: usize, column: u16) -> Option<usize> {
    dot_columns(area, count)
        .into_iter()
        .position(|x| x == column)
}

/// One dot per item; the active one filled.
#[derive(Debug, Clone)]
pub struct IndicatorBar<'a> {
    indicators: Vec<Indicator>,
    styles: &'a CarouselStyles,
}

impl<'a> IndicatorBar<'a> {
    /// Bar for `indicators`, in item order.
    pub fn new(indicators: impl IntoIterator<Item = Indicator>, styles: &'a CarouselStyles) -> Self {
        Self {
            indicators: indicators.into_iter().collect(),
            styles,
        }
    }
}

impl Widget for IndicatorBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let columns = dot_columns(area, self.indicators.len());
        for (indicator, x) in self.indicators.iter().zip(columns) {
            let (symbol, style) = if indicator.active {
                (DOT_ACTIVE, self.styles.dot_active)
            } else {
                (DOT_INACTIVE, self.styles.dot_inactive)
            };
            buf.set_string(x, area.y, symbol, style);
        }
    }
}

//! Bottom status line: position, autoplay state, key hints, promo countdown.

use crate::carousel::CarouselState;
use crate::view::styles::CarouselStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Key hint shown in the middle of the status line.
const KEY_HINTS: &str = "←/→ move · 1-9 jump · space autoplay · q quit";

/// Autoplay as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayLabel {
    /// Auto-advance timer running.
    Playing,
    /// Autoplay on but suspended (interaction, hover, drag).
    Paused,
    /// Autoplay turned off.
    Off,
}

impl AutoplayLabel {
    /// Label for a carousel snapshot and the autoplay preference.
    pub fn from_state(state: CarouselState, autoplay: bool) -> Self {
        if !autoplay {
            AutoplayLabel::Off
        } else if state.auto_advance_enabled {
            AutoplayLabel::Playing
        } else {
            AutoplayLabel::Paused
        }
    }

    fn text(self) -> &'static str {
        match self {
            AutoplayLabel::Playing => "▶ auto",
            AutoplayLabel::Paused => "paused",
            AutoplayLabel::Off => "manual",
        }
    }
}

/// Status line widget.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    position: Option<(usize, usize)>,
    autoplay: Option<AutoplayLabel>,
    promo: Option<String>,
    styles: &'a CarouselStyles,
}

impl<'a> StatusBar<'a> {
    /// Empty status line.
    pub fn new(styles: &'a CarouselStyles) -> Self {
        Self {
            position: None,
            autoplay: None,
            promo: None,
            styles,
        }
    }

    /// Show "index/count" (`index` zero-based, shown one-based).
    pub fn position(mut self, index: usize, count: usize) -> Self {
        self.position = Some((index, count));
        self
    }

    /// Show the autoplay label.
    pub fn autoplay(mut self, label: AutoplayLabel) -> Self {
        self.autoplay = Some(label);
        self
    }

    /// Show the promo countdown text (already formatted as `MM:SS`).
    pub fn promo(mut self, remaining: String) -> Self {
        self.promo = Some(remaining);
        self
    }

    fn left_text(&self) -> String {
        let mut parts = Vec::new();
        if let Some((index, count)) = self.position {
            parts.push(format!("{}/{}", index + 1, count));
        }
        if let Some(label) = self.autoplay {
            parts.push(label.text().to_string());
        }
        format!(" {}", parts.join("  "))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let left = self.left_text();
        let right = self
            .promo
            .as_deref()
            .map(|remaining| format!("Offer ends in {remaining} "))
            .unwrap_or_default();

        let [left_area, hint_area, right_area] = Layout::horizontal([
            Constraint::Length(text_width(&left)),
            Constraint::Min(0),
            Constraint::Length(text_width(&right)),
        ])
        .areas(area);

        Paragraph::new(Span::styled(left, self.styles.status)).render(left_area, buf);

        if usize::from(hint_area.width) >= KEY_HINTS.width() {
            Paragraph::new(Span::styled(KEY_HINTS, self.styles.status))
                .alignment(Alignment::Center)
                .render(hint_area, buf);
        }

        Paragraph::new(Span::styled(right, self.styles.promo)).render(right_area, buf);
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

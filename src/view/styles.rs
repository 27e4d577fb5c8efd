//! Carousel color scheme.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Colors are off if the flag is set or `NO_COLOR` has any value.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Fixed setting, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CarouselStyles =====

/// Styles for every carousel element.
///
/// Without colors, emphasis falls back to modifiers so the active card and
/// dot are still distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselStyles {
    /// Card border and text.
    pub card: Style,
    /// Border of the card under the indicator.
    pub active_card: Style,
    /// Card caption line.
    pub caption: Style,
    /// Prev/next buttons.
    pub button: Style,
    /// Highlighted indicator dot.
    pub dot_active: Style,
    /// Other indicator dots.
    pub dot_inactive: Style,
    /// Header line.
    pub header: Style,
    /// Status bar background text.
    pub status: Style,
    /// Promo countdown.
    pub promo: Style,
}

impl CarouselStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                card: Style::default().fg(Color::Gray),
                active_card: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                caption: Style::default().fg(Color::DarkGray),
                button: Style::default().fg(Color::Cyan),
                dot_active: Style::default().fg(Color::Cyan),
                dot_inactive: Style::default().fg(Color::DarkGray),
                header: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                status: Style::default().fg(Color::Gray),
                promo: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                card: Style::default(),
                active_card: Style::default().add_modifier(Modifier::BOLD),
                caption: Style::default(),
                button: Style::default(),
                dot_active: Style::default().add_modifier(Modifier::BOLD),
                dot_inactive: Style::default(),
                header: Style::default().add_modifier(Modifier::BOLD),
                status: Style::default(),
                promo: Style::default(),
            }
        }
    }
}

impl Default for CarouselStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

//! TUI rendering and terminal management (impure shell)
//!
//! [`TuiApp`] owns the terminal, the catalog and the carousel. Terminal
//! events become carousel operations; the scroll commands those produce are
//! fed to a [`ScrollAnimator`], and every frame draws the animator's offset.
//! Time is passed in explicitly so the app can be driven from tests.

pub mod animator;
pub mod constants;
pub mod indicators;
pub mod layout;
pub mod status_bar;
pub mod styles;
pub mod track;

pub use animator::ScrollAnimator;
pub use indicators::{dot_columns, indicator_at, IndicatorBar};
pub use layout::{CarouselLayout, HitTarget};
pub use status_bar::{AutoplayLabel, StatusBar};
pub use styles::{CarouselStyles, ColorConfig};
pub use track::{required_clone_count, TrackStrip};

use crate::carousel::{CarouselOptions, Direction, InfiniteCarousel, InitOutcome, ScrollCommand};
use crate::config::KeyBindings;
use crate::model::{uniform_item_width, ItemDescriptor, KeyAction};
use crate::promo::PromoCountdown;
use chrono::{DateTime, Utc};
use constants::{FRAME_INTERVAL, IDLE_POLL_INTERVAL};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Startup settings for the viewer.
///
/// Built by `main` from the resolved configuration.
#[derive(Debug)]
pub struct ViewerOptions {
    /// Carousel timing and geometry.
    pub carousel: CarouselOptions,
    /// Start with auto-advance on.
    pub autoplay: bool,
    /// Color output.
    pub colors: ColorConfig,
    /// Where the catalog came from, shown in the header.
    pub source_label: String,
    /// Promo countdown, if enabled.
    pub promo: Option<PromoCountdown>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            carousel: CarouselOptions::default(),
            autoplay: true,
            colors: ColorConfig::from_env_and_args(false),
            source_label: String::new(),
            promo: None,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    items: Vec<ItemDescriptor>,
    /// Natural card width of the catalog.
    item_width: u16,
    /// Card width the carousel is currently laid out with.
    laid_out_width: u16,
    options: CarouselOptions,
    autoplay: bool,
    carousel: Option<InfiniteCarousel>,
    animator: ScrollAnimator,
    promo: Option<PromoCountdown>,
    key_bindings: KeyBindings,
    styles: CarouselStyles,
    source_label: String,
    /// Layout of the last drawn frame (for mouse hit testing)
    layout: Option<CarouselLayout>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(items: Vec<ItemDescriptor>, options: ViewerOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, items, options))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q, Esc or Ctrl+C). Sleeps until the next
    /// carousel deadline, or one frame while the track is moving.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let started = Instant::now();

        loop {
            let now = started.elapsed();
            let wall = Utc::now();
            self.tick(now, wall);
            self.draw(now, wall)?;

            let timeout = self.poll_timeout(started.elapsed());
            if !event::poll(timeout)? {
                continue;
            }

            let now = started.elapsed();
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key, now) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse, now),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the app around an existing terminal. The carousel is created on
    /// the first [`draw`](Self::draw), once the track width is known.
    pub fn with_terminal(
        terminal: Terminal<B>,
        items: Vec<ItemDescriptor>,
        options: ViewerOptions,
    ) -> Self {
        let item_width = uniform_item_width(&items);
        Self {
            terminal,
            items,
            item_width,
            laid_out_width: 0,
            options: options.carousel,
            autoplay: options.autoplay,
            carousel: None,
            animator: ScrollAnimator::new(0.0, options.carousel.settle),
            promo: options.promo,
            key_bindings: KeyBindings::default(),
            styles: CarouselStyles::with_color_config(options.colors),
            source_label: options.source_label,
            layout: None,
        }
    }

    /// The carousel, once initialized.
    pub fn carousel(&self) -> Option<&InfiniteCarousel> {
        self.carousel.as_ref()
    }

    /// Track offset currently drawn.
    pub fn displayed_offset(&self, now: Duration) -> f64 {
        self.animator.position(now)
    }

    /// The terminal (for inspecting a TestBackend buffer).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Duration) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        if action == KeyAction::Quit {
            return true;
        }

        let Some(carousel) = self.carousel.as_mut() else {
            return false;
        };

        let command = match action {
            KeyAction::Previous => carousel.advance(Direction::Backward, now),
            KeyAction::Next => carousel.advance(Direction::Forward, now),
            KeyAction::JumpTo(index) if index < carousel.item_count() => {
                carousel.jump_to(index, now)
            }
            KeyAction::JumpTo(_) => None,
            KeyAction::ToggleAutoplay => {
                let enabled = !carousel.autoplay();
                carousel.set_autoplay(enabled, now);
                info!(enabled, "Autoplay toggled");
                None
            }
            KeyAction::Quit => None,
        };

        if let Some(command) = command {
            self.animator.apply(command, now);
        }
        false
    }

    /// Handle a single mouse event
    ///
    /// Buttons and dots navigate, a left-button drag on the track scrolls it,
    /// and hovering the track pauses auto-advance.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Duration) {
        let Some(layout) = self.layout else {
            return;
        };
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };

        let target = layout.hit_test(mouse.column, mouse.row);

        // Leaving the track releases a drag, same as letting go of the button.
        let released = if target != HitTarget::Track && carousel.is_dragging() {
            debug!(column = mouse.column, row = mouse.row, "Pointer left track mid-drag");
            carousel.end_drag(now)
        } else {
            None
        };

        match (target == HitTarget::Track, carousel.is_hovered()) {
            (true, false) => carousel.pointer_enter(now),
            (false, true) => carousel.pointer_leave(now),
            _ => {}
        }

        let pointer_x = f64::from(mouse.column);
        let shown = self.animator.position(now);
        let command = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match target {
                HitTarget::Previous => carousel.advance(Direction::Backward, now),
                HitTarget::Next => carousel.advance(Direction::Forward, now),
                HitTarget::Indicators => {
                    indicator_at(layout.indicators, carousel.item_count(), mouse.column)
                        .and_then(|index| carousel.jump_to(index, now))
                }
                HitTarget::Track => {
                    // Grabbing freezes any tween where it is on screen.
                    carousel.begin_drag_from(pointer_x, shown, now);
                    Some(ScrollCommand::instant(carousel.viewport()))
                }
                HitTarget::Nothing => None,
            },
            MouseEventKind::Drag(MouseButton::Left) => carousel.update_drag(pointer_x, now),
            MouseEventKind::Up(MouseButton::Left) => carousel.end_drag(now),
            _ => None,
        };

        for command in released.into_iter().chain(command) {
            self.animator.apply(command, now);
        }
    }

    /// Handle a terminal resize event
    ///
    /// The new layout, and any carousel relayout, happen on the next draw.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized");
        self.layout = None;
    }

    /// Advance timers and the scroll animation to `now`.
    ///
    /// `wall` drives the promo countdown, which is tied to real time.
    pub fn tick(&mut self, now: Duration, wall: DateTime<Utc>) {
        if let Some(carousel) = self.carousel.as_mut() {
            for command in carousel.tick(now) {
                self.animator.apply(command, now);
            }
            if let Some(rest) = self.animator.advance(now) {
                if let Some(command) = carousel.on_scroll_settled(rest, now) {
                    self.animator.apply(command, now);
                }
            }
        }

        if let Some(promo) = self.promo.as_mut() {
            if let Err(e) = promo.tick(wall) {
                warn!(error = %e, "Failed to persist renewed promo period");
            }
        }
    }

    /// How long the event loop may sleep before the next tick is due.
    pub fn poll_timeout(&self, now: Duration) -> Duration {
        let Some(carousel) = self.carousel.as_ref() else {
            return IDLE_POLL_INTERVAL;
        };
        if self.animator.is_animating() || carousel.is_animating() {
            return FRAME_INTERVAL;
        }
        carousel
            .next_deadline()
            .map_or(IDLE_POLL_INTERVAL, |deadline| {
                deadline.saturating_sub(now).min(IDLE_POLL_INTERVAL)
            })
    }

    /// Render the current frame
    ///
    /// Creates or relayouts the carousel first if the track width changed.
    pub fn draw(&mut self, now: Duration, wall: DateTime<Utc>) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let layout = CarouselLayout::compute(Rect::new(0, 0, size.width, size.height));
        self.layout = Some(layout);
        self.fit_track(layout.track.width, now);

        let screen = CarouselScreen {
            layout,
            items: &self.items,
            carousel: self.carousel.as_ref(),
            card_width: self.laid_out_width,
            offset: self.animator.position(now),
            styles: &self.styles,
            source_label: &self.source_label,
            promo: self.promo.as_ref().map(|promo| promo.display(wall)),
        };
        self.terminal.draw(|frame| frame.render_widget(screen, frame.area()))?;
        Ok(())
    }

    /// Make the carousel match a track window `track_width` columns wide.
    ///
    /// Cards shrink to the window when it is narrower than the catalog's
    /// natural width, and the clone padding grows until the window cannot see
    /// past either end of the track. A zero-width window defers initialization.
    fn fit_track(&mut self, track_width: u16, now: Duration) {
        let width = self.item_width.min(track_width);

        if let Some(carousel) = self.carousel.as_mut() {
            if width != self.laid_out_width {
                if let Some(command) = carousel.relayout(f64::from(width), now) {
                    self.animator.apply(command, now);
                    self.laid_out_width = width;
                }
            }
            let clone_count = required_clone_count(
                track_width,
                self.laid_out_width,
                carousel.geometry().stride(),
                self.options.clone_count,
            );
            if let Some(command) = carousel.set_clone_count(clone_count, now) {
                self.animator.apply(command, now);
            }
            return;
        }

        let stride = f64::from(width) + self.options.gap.max(0.0);
        let options = CarouselOptions {
            clone_count: required_clone_count(
                track_width,
                width,
                stride,
                self.options.clone_count,
            ),
            ..self.options
        };

        match InfiniteCarousel::initialize(self.items.len(), f64::from(width), options) {
            InitOutcome::Empty | InitOutcome::Deferred => {}
            InitOutcome::Ready {
                mut carousel,
                command,
            } => {
                self.animator.apply(command, now);
                if self.autoplay {
                    carousel.start_auto_advance(now);
                } else {
                    carousel.set_autoplay(false, now);
                }
                info!(
                    items = self.items.len(),
                    card_width = width,
                    clone_count = options.clone_count,
                    autoplay = self.autoplay,
                    "Carousel ready"
                );
                self.laid_out_width = width;
                self.carousel = Some(carousel);
            }
        }
    }
}

/// Whole-screen widget for one frame.
struct CarouselScreen<'a> {
    layout: CarouselLayout,
    items: &'a [ItemDescriptor],
    carousel: Option<&'a InfiniteCarousel>,
    card_width: u16,
    offset: f64,
    styles: &'a CarouselStyles,
    source_label: &'a str,
    promo: Option<String>,
}

impl CarouselScreen<'_> {
    fn render_header(&self, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" loopreel", self.styles.header)];
        if !self.source_label.is_empty() {
            spans.push(Span::styled(
                format!("  {}", self.source_label),
                self.styles.status,
            ));
        }
        spans.push(Span::styled(
            format!("  {} items", self.items.len()),
            self.styles.status,
        ));
        Paragraph::new(Line::from(spans)).render(self.layout.header, buf);
    }

    fn render_button(&self, area: Rect, symbol: &str, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let x = area.x + area.width / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, symbol, self.styles.button);
    }

    fn render_placeholder(&self, buf: &mut Buffer) {
        let message = if self.items.is_empty() {
            "No items to show"
        } else {
            "Terminal too narrow"
        };
        let track = self.layout.track;
        let row = Rect::new(track.x, track.y + track.height / 2, track.width, 1)
            .intersection(track);
        Paragraph::new(Span::styled(message, self.styles.status))
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

impl Widget for CarouselScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        self.render_header(buf);

        let mut status = StatusBar::new(self.styles);

        match self.carousel {
            Some(carousel) => {
                self.render_button(self.layout.prev_button, "◀", buf);
                self.render_button(self.layout.next_button, "▶", buf);

                TrackStrip::new(
                    self.items,
                    carousel.track(),
                    carousel.geometry(),
                    self.card_width,
                    self.styles,
                )
                .offset(self.offset)
                .active_item(carousel.logical_index())
                .render(self.layout.track, buf);

                IndicatorBar::new(carousel.indicators(), self.styles)
                    .render(self.layout.indicators, buf);

                status = status
                    .position(carousel.logical_index(), carousel.item_count())
                    .autoplay(AutoplayLabel::from_state(
                        carousel.state(),
                        carousel.autoplay(),
                    ));
            }
            None => self.render_placeholder(buf),
        }

        if let Some(remaining) = self.promo {
            status = status.promo(remaining);
        }
        status.render(self.layout.status, buf);
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(items: Vec<ItemDescriptor>, options: ViewerOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(items, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

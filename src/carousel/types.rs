//! Value types exchanged between the carousel and its presentation layer.

use std::time::Duration;

/// Direction of a single-step navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the next item (index + 1).
    Forward,
    /// Towards the previous item (index - 1).
    Backward,
}

impl Direction {
    /// Signed step applied to the logical index.
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// How the presentation layer should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animate towards the target over the settle duration.
    Smooth,
    /// Jump to the target with no animation.
    Instant,
}

/// A request to move the viewport to an absolute track offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    /// Absolute offset into the track buffer, in track units (pixels or cells).
    pub offset: f64,
    /// Whether to animate the move.
    pub behavior: ScrollBehavior,
}

impl ScrollCommand {
    /// Smooth scroll to `offset`.
    pub fn smooth(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Instant jump to `offset`.
    pub fn instant(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Instant,
        }
    }

    /// True for instant (non-animated) commands.
    pub fn is_instant(&self) -> bool {
        self.behavior == ScrollBehavior::Instant
    }
}

/// Observer-facing snapshot of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    /// Active item, always in `[0, N)`.
    pub logical_index: usize,
    /// A smooth scroll is in flight and has not yet settled.
    pub is_animating: bool,
    /// The auto-advance timer is running.
    pub auto_advance_enabled: bool,
}

/// One indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Real item index this dot stands for.
    pub index: usize,
    /// Whether this dot is the active one.
    pub active: bool,
}

/// Tuning knobs for [`InfiniteCarousel`](super::InfiniteCarousel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    /// Interval between auto-advance steps.
    pub cadence: Duration,
    /// Quiet period after user interaction before auto-advance resumes.
    pub resume_delay: Duration,
    /// Nominal duration of a smooth scroll; the settle check runs when it elapses.
    pub settle: Duration,
    /// Number of cloned items padded onto each end of the track.
    pub clone_count: usize,
    /// Track units scrolled per unit of pointer travel while dragging.
    pub drag_sensitivity: f64,
    /// Gap between adjacent items, added to the item width to form the stride.
    pub gap: f64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            cadence: Duration::from_millis(3000),
            resume_delay: Duration::from_millis(5000),
            settle: Duration::from_millis(500),
            clone_count: 3,
            drag_sensitivity: 2.0,
            gap: 24.0,
        }
    }
}

//! Infinite carousel core (pure, rendering-agnostic).
//!
//! Consumes item counts, measured widths and timestamps; produces
//! [`ScrollCommand`]s and the active indicator index. No terminal or I/O here.

pub mod drag;
pub mod infinite;
pub mod timer;
pub mod track;
pub mod types;

pub use drag::DragTracker;
pub use infinite::{InfiniteCarousel, InitOutcome};
pub use timer::{OneShotTimer, RepeatingTimer};
pub use track::{RenderId, Slot, SlotKind, TrackBuffer, TrackGeometry};
pub use types::{
    CarouselOptions, CarouselState, Direction, Indicator, ScrollBehavior, ScrollCommand,
};

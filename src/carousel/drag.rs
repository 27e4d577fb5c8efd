//! Pointer drag tracking.

/// Tracks one pointer drag gesture over the track.
///
/// The viewport follows the pointer delta directly, scaled by the sensitivity:
/// dragging right pulls earlier items into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTracker {
    start_x: f64,
    origin_offset: f64,
    sensitivity: f64,
}

impl DragTracker {
    /// Start tracking at `pointer_x` with the viewport at `origin_offset`.
    pub fn new(pointer_x: f64, origin_offset: f64, sensitivity: f64) -> Self {
        Self {
            start_x: pointer_x,
            origin_offset,
            sensitivity,
        }
    }

    /// Viewport offset for the pointer at `pointer_x` (unclamped).
    pub fn offset_for(&self, pointer_x: f64) -> f64 {
        self.origin_offset - (pointer_x - self.start_x) * self.sensitivity
    }

    /// Offset the viewport had when the drag began.
    pub fn origin_offset(&self) -> f64 {
        self.origin_offset
    }
}

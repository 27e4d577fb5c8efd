//! The infinite carousel state machine.
//!
//! # Model
//!
//! The carousel owns a [`TrackBuffer`] of real items padded with clones, the
//! active logical index, and three timers:
//!
//! - auto-advance (repeating, `cadence`)
//! - settle (one-shot, `settle`): armed by every smooth scroll
//! - resume (one-shot, `resume_delay`): armed by every user interaction
//!
//! Nothing here sleeps. The owner calls [`InfiniteCarousel::tick`] with the
//! current time and forwards the returned [`ScrollCommand`]s to whatever draws
//! the track.
//!
//! # Settling
//!
//! There is no reliable "scroll finished" signal, so settling is a heuristic:
//! the settle timer fires after the nominal animation duration and the carousel
//! assumes the viewport reached its commanded target. At that point, if the
//! viewport rests on a clone, it is re-anchored instantly onto the real copy of
//! the same item. That jump is invisible because clones look identical to the
//! items they mirror.

use super::drag::DragTracker;
use super::timer::{OneShotTimer, RepeatingTimer};
use super::track::{TrackBuffer, TrackGeometry};
use super::types::{CarouselOptions, CarouselState, Direction, Indicator, ScrollCommand};
use std::time::Duration;
use tracing::{debug, trace};

/// Result of [`InfiniteCarousel::initialize`].
#[derive(Debug)]
pub enum InitOutcome {
    /// No items: nothing to show, no controls, no timers.
    Empty,
    /// Items exist but no usable width yet; retry after the next layout pass.
    Deferred,
    /// Carousel is ready; apply `command` to place the viewport on the first real item.
    Ready {
        /// The initialized carousel.
        carousel: InfiniteCarousel,
        /// Instant scroll to the first real item.
        command: ScrollCommand,
    },
}

/// Cyclic item strip with clone padding, auto-advance, and drag support.
#[derive(Debug, Clone)]
pub struct InfiniteCarousel {
    options: CarouselOptions,
    track: TrackBuffer,
    geometry: TrackGeometry,
    logical_index: usize,
    viewport: f64,
    settle: OneShotTimer,
    queued_slot: Option<usize>,
    auto_advance: RepeatingTimer,
    resume: OneShotTimer,
    autoplay: bool,
    hovered: bool,
    drag: Option<DragTracker>,
}

/// Stride for a measured item width, or `None` if the width is unusable.
fn stride_for(item_width: f64, gap: f64) -> Option<f64> {
    if !item_width.is_finite() || item_width <= 0.0 {
        return None;
    }
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
    Some(item_width + gap)
}

impl InfiniteCarousel {
    /// Build the carousel once item widths are measurable.
    ///
    /// The viewport starts on the first real item (`clone_count * stride`).
    /// Autoplay starts enabled but the auto-advance timer is not started;
    /// call [`start_auto_advance`](Self::start_auto_advance) when ready.
    pub fn initialize(item_count: usize, item_width: f64, options: CarouselOptions) -> InitOutcome {
        if item_count == 0 {
            debug!("Carousel has no items; nothing to initialize");
            return InitOutcome::Empty;
        }
        let Some(stride) = stride_for(item_width, options.gap) else {
            debug!(item_width, "Item width not measurable yet; deferring carousel init");
            return InitOutcome::Deferred;
        };

        let track = TrackBuffer::new(item_count, options.clone_count);
        let geometry = TrackGeometry::new(stride, track.len());
        let viewport = geometry.offset_of_slot(track.real_slot(0));

        debug!(
            item_count,
            stride,
            slots = track.len(),
            viewport,
            "Carousel initialized"
        );

        let carousel = Self {
            options,
            track,
            geometry,
            logical_index: 0,
            viewport,
            settle: OneShotTimer::new(),
            queued_slot: None,
            auto_advance: RepeatingTimer::new(options.cadence),
            resume: OneShotTimer::new(),
            autoplay: true,
            hovered: false,
            drag: None,
        };

        InitOutcome::Ready {
            carousel,
            command: ScrollCommand::instant(viewport),
        }
    }

    // ===== Accessors =====

    /// Active item index, always in `[0, N)`.
    pub fn logical_index(&self) -> usize {
        self.logical_index
    }

    /// Number of real items.
    pub fn item_count(&self) -> usize {
        self.track.item_count()
    }

    /// Last commanded (or observed, once settled) viewport offset.
    pub fn viewport(&self) -> f64 {
        self.viewport
    }

    /// The padded slot buffer.
    pub fn track(&self) -> &TrackBuffer {
        &self.track
    }

    /// Slot-to-offset mapping.
    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    /// Options the carousel was built with.
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// True while a smooth scroll has not yet settled.
    pub fn is_animating(&self) -> bool {
        self.settle.is_pending()
    }

    /// True while a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// True while the pointer hovers the track.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// User preference for auto-advance.
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// True while auto-advance resumption is scheduled.
    pub fn resume_pending(&self) -> bool {
        self.resume.is_pending()
    }

    /// Observer-facing snapshot.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            logical_index: self.logical_index,
            is_animating: self.is_animating(),
            auto_advance_enabled: self.auto_advance.is_running(),
        }
    }

    /// Indicator dots, one per real item; exactly one is active.
    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        (0..self.item_count()).map(move |index| Indicator {
            index,
            active: index == self.logical_index,
        })
    }

    /// Earliest pending timer deadline, for event-loop scheduling.
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.settle.deadline(),
            self.resume.deadline(),
            self.auto_advance.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    // ===== Navigation =====

    /// User navigation by one item. Suspends auto-advance until the quiet period passes.
    ///
    /// Returns `None` if a scroll is already in flight; the move is queued and
    /// issued when that scroll settles.
    pub fn advance(&mut self, direction: Direction, now: Duration) -> Option<ScrollCommand> {
        self.interrupt(now);
        self.step(direction, now)
    }

    /// User navigation to an explicit item (indicator dots). Out-of-range
    /// indices wrap modulo the item count.
    pub fn jump_to(&mut self, index: usize, now: Duration) -> Option<ScrollCommand> {
        self.interrupt(now);
        self.logical_index = index % self.item_count();
        let slot = self.track.real_slot(self.logical_index);
        self.navigate_to_slot(slot, now)
    }

    /// Report the viewport position observed by the presentation layer after
    /// a scroll appears to have stopped.
    ///
    /// While a smooth scroll is still nominally in flight the check is
    /// deferred to the settle timer. During a drag it is ignored.
    pub fn on_scroll_settled(&mut self, observed: f64, _now: Duration) -> Option<ScrollCommand> {
        if self.drag.is_some() || self.is_animating() {
            return None;
        }
        self.viewport = self.geometry.clamp_offset(observed);
        self.settle_check()
    }

    /// Recompute the stride after a layout change and re-anchor on the current item.
    ///
    /// Returns `None` and keeps the old geometry if the width is unusable.
    pub fn relayout(&mut self, item_width: f64, _now: Duration) -> Option<ScrollCommand> {
        let stride = stride_for(item_width, self.options.gap)?;
        self.geometry = TrackGeometry::new(stride, self.track.len());
        self.settle.cancel();
        self.queued_slot = None;
        self.drag = None;
        self.viewport = self
            .geometry
            .offset_of_slot(self.track.real_slot(self.logical_index));
        debug!(stride, viewport = self.viewport, "Carousel relayout");
        Some(ScrollCommand::instant(self.viewport))
    }

    /// Rebuild the track with `clone_count` clones on each side and re-anchor
    /// on the current item.
    ///
    /// Returns `None` if the padding is already `clone_count`.
    pub fn set_clone_count(&mut self, clone_count: usize, _now: Duration) -> Option<ScrollCommand> {
        if clone_count == self.track.clone_count() {
            return None;
        }
        self.track = TrackBuffer::new(self.item_count(), clone_count);
        self.geometry = TrackGeometry::new(self.geometry.stride(), self.track.len());
        self.options.clone_count = clone_count;
        self.settle.cancel();
        self.queued_slot = None;
        self.drag = None;
        self.viewport = self
            .geometry
            .offset_of_slot(self.track.real_slot(self.logical_index));
        debug!(
            clone_count,
            slots = self.track.len(),
            viewport = self.viewport,
            "Carousel padding rebuilt"
        );
        Some(ScrollCommand::instant(self.viewport))
    }

    // ===== Auto-advance =====

    /// Start the auto-advance timer. No effect if already running.
    ///
    /// Also drops any pending resume, since the timer is now running.
    pub fn start_auto_advance(&mut self, now: Duration) {
        self.resume.cancel();
        if self.auto_advance.start(now) {
            trace!("Auto-advance started");
        }
    }

    /// Stop the auto-advance timer. No effect if already stopped.
    pub fn stop_auto_advance(&mut self) {
        if self.auto_advance.stop() {
            trace!("Auto-advance stopped");
        }
    }

    /// Set the autoplay preference. Disabling stops auto-advance and drops any pending resume.
    pub fn set_autoplay(&mut self, enabled: bool, now: Duration) {
        self.autoplay = enabled;
        if enabled {
            if self.drag.is_none() && !self.hovered {
                self.start_auto_advance(now);
            }
        } else {
            self.stop_auto_advance();
            self.resume.cancel();
        }
    }

    /// Pointer entered the track: pause auto-advance.
    pub fn pointer_enter(&mut self, _now: Duration) {
        if self.hovered {
            return;
        }
        self.hovered = true;
        self.stop_auto_advance();
    }

    /// Pointer left the track: restart auto-advance if autoplay is on.
    pub fn pointer_leave(&mut self, now: Duration) {
        if !self.hovered {
            return;
        }
        self.hovered = false;
        if self.autoplay && self.drag.is_none() {
            self.start_auto_advance(now);
        }
    }

    // ===== Drag =====

    /// Begin a drag at `pointer_x`. Cancels any in-flight scroll and queued move.
    pub fn begin_drag(&mut self, pointer_x: f64, now: Duration) {
        self.begin_drag_from(pointer_x, self.viewport, now);
    }

    /// Begin a drag with the viewport taken to be at `displayed_offset`.
    ///
    /// Used when the track is grabbed mid-scroll: the drag continues from what
    /// is on screen instead of the scroll's target.
    pub fn begin_drag_from(&mut self, pointer_x: f64, displayed_offset: f64, now: Duration) {
        if displayed_offset.is_finite() {
            self.viewport = self.geometry.clamp_offset(displayed_offset);
        }
        self.interrupt(now);
        self.settle.cancel();
        self.queued_slot = None;
        self.drag = Some(DragTracker::new(
            pointer_x,
            self.viewport,
            self.options.drag_sensitivity,
        ));
        trace!(pointer_x, origin = self.viewport, "Drag started");
    }

    /// Move the viewport with the pointer. No-op outside a drag.
    pub fn update_drag(&mut self, pointer_x: f64, now: Duration) -> Option<ScrollCommand> {
        let drag = self.drag?;
        self.viewport = self.geometry.clamp_offset(drag.offset_for(pointer_x));
        if self.autoplay {
            self.resume.schedule(now, self.options.resume_delay);
        }
        Some(ScrollCommand::instant(self.viewport))
    }

    /// Release the drag. The viewport is left where it was released; only a
    /// rest on clone padding is re-anchored.
    pub fn end_drag(&mut self, now: Duration) -> Option<ScrollCommand> {
        self.drag.take()?;
        if self.autoplay {
            self.resume.schedule(now, self.options.resume_delay);
        }
        trace!(viewport = self.viewport, "Drag ended");
        self.settle_check()
    }

    // ===== Timers =====

    /// Fire due timers and return the scroll commands they produce, in order.
    pub fn tick(&mut self, now: Duration) -> Vec<ScrollCommand> {
        let mut commands = Vec::new();

        if self.settle.fire(now) {
            match self.queued_slot.take() {
                Some(slot) => {
                    // The queued move already updated the index; only fix the position.
                    commands.extend(self.reanchor(false));
                    commands.extend(self.navigate_to_slot(slot, now));
                }
                None => commands.extend(self.settle_check()),
            }
        }

        if self.resume.fire(now) {
            if self.drag.is_some() {
                self.resume.schedule(now, self.options.resume_delay);
            } else if self.autoplay && !self.hovered {
                debug!("Quiet period over; resuming auto-advance");
                self.start_auto_advance(now);
            }
        }

        if self.auto_advance.fire(now) && !self.is_animating() && self.drag.is_none() {
            commands.extend(self.step(Direction::Forward, now));
        }

        commands
    }

    // ===== Internals =====

    /// Suspend auto-advance and (re)schedule its resumption. Last call wins.
    fn interrupt(&mut self, now: Duration) {
        self.stop_auto_advance();
        if self.autoplay {
            self.resume.schedule(now, self.options.resume_delay);
        }
    }

    /// Move the logical index one step and scroll towards it.
    ///
    /// Wrapping steps target the clone that mirrors the destination item so
    /// the strip keeps moving in the same direction.
    fn step(&mut self, direction: Direction, now: Duration) -> Option<ScrollCommand> {
        let n = self.item_count() as isize;
        let from = self.logical_index as isize;
        let to = (from + direction.step() + n).rem_euclid(n);
        self.logical_index = to as usize;

        let k = self.track.clone_count();
        let slot = match direction {
            Direction::Forward if k > 0 && from == n - 1 => k + n as usize,
            Direction::Backward if k > 0 && from == 0 => k - 1,
            _ => self.track.real_slot(self.logical_index),
        };
        self.navigate_to_slot(slot, now)
    }

    fn navigate_to_slot(&mut self, slot: usize, now: Duration) -> Option<ScrollCommand> {
        if self.is_animating() {
            trace!(slot, "Scroll in flight; queueing navigation");
            self.queued_slot = Some(slot);
            return None;
        }
        self.viewport = self.geometry.offset_of_slot(slot);
        self.settle.schedule(now, self.options.settle);
        trace!(slot, viewport = self.viewport, index = self.logical_index, "Scrolling");
        Some(ScrollCommand::smooth(self.viewport))
    }

    /// Reconcile the logical index with the viewport and teleport off clones.
    fn settle_check(&mut self) -> Option<ScrollCommand> {
        self.reanchor(true)
    }

    fn reanchor(&mut self, sync_index: bool) -> Option<ScrollCommand> {
        let position = self.geometry.nearest_slot(self.viewport);
        let slot = *self.track.get(position)?;
        if sync_index {
            self.logical_index = slot.item;
        }

        if !slot.is_clone() {
            return None;
        }

        let real = self.track.real_slot(slot.item);
        let shift = (real as f64 - position as f64) * self.geometry.stride();
        let from = self.viewport;
        self.viewport = self.geometry.clamp_offset(self.viewport + shift);
        debug!(
            from,
            to = self.viewport,
            index = self.logical_index,
            "Re-anchored viewport off clone padding"
        );
        Some(ScrollCommand::instant(self.viewport))
    }
}

#[cfg(test)]
#[path = "infinite_tests.rs"]
mod tests;

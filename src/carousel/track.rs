//! Track buffer: real items padded with clones at both ends.
//!
//! The buffer is laid out as `[last K items] + [N real items] + [first K items]`.
//! Clones point back at the real item they mirror and carry their own
//! [`RenderId`], so a renderer can draw and measure them independently.

use std::fmt;
use std::ops::Range;

/// Render identity of a slot. Unique within a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderId(usize);

impl RenderId {
    /// Raw identifier value.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for RenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot-{}", self.0)
    }
}

/// Position class of a slot within the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Clone in the leading padding (mirrors one of the last items).
    HeadClone,
    /// A real item.
    Real,
    /// Clone in the trailing padding (mirrors one of the first items).
    TailClone,
}

/// One physically rendered position in the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Index of the real item whose content this slot shows.
    pub item: usize,
    /// Whether this is a real item or padding.
    pub kind: SlotKind,
    /// Distinct render identity.
    pub render_id: RenderId,
}

impl Slot {
    /// True for head or tail padding.
    pub fn is_clone(&self) -> bool {
        self.kind != SlotKind::Real
    }
}

/// Rendered sequence of slots. Length is always `item_count + 2 * clone_count`
/// for a non-empty item set, and zero otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackBuffer {
    item_count: usize,
    clone_count: usize,
    slots: Vec<Slot>,
}

impl TrackBuffer {
    /// Build the buffer for `item_count` items padded with `clone_count` clones per side.
    ///
    /// When there are fewer items than clones, clones wrap around the item
    /// sequence so the length invariant still holds.
    pub fn new(item_count: usize, clone_count: usize) -> Self {
        if item_count == 0 {
            return Self {
                item_count: 0,
                clone_count,
                slots: Vec::new(),
            };
        }

        let n = item_count as isize;
        let k = clone_count as isize;

        let head = (0..k).map(|j| ((n - k + j).rem_euclid(n) as usize, SlotKind::HeadClone));
        let real = (0..item_count).map(|i| (i, SlotKind::Real));
        let tail = (0..clone_count).map(|j| (j % item_count, SlotKind::TailClone));

        let slots = head
            .chain(real)
            .chain(tail)
            .enumerate()
            .map(|(position, (item, kind))| Slot {
                item,
                kind,
                render_id: RenderId(position),
            })
            .collect();

        Self {
            item_count,
            clone_count,
            slots,
        }
    }

    /// Number of real items.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Clone padding per side.
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    /// Total slot count.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the track holds no items.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in render order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Slot> {
        self.slots.get(position)
    }

    /// Slot position of the real copy of `item`.
    pub fn real_slot(&self, item: usize) -> usize {
        self.clone_count + item
    }

    /// Slot positions holding real items.
    pub fn real_range(&self) -> Range<usize> {
        self.clone_count..self.clone_count + self.item_count
    }
}

/// Maps slot positions to track offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    stride: f64,
    slot_count: usize,
}

impl TrackGeometry {
    /// Geometry for `slot_count` slots spaced `stride` apart.
    pub fn new(stride: f64, slot_count: usize) -> Self {
        Self { stride, slot_count }
    }

    /// Distance between consecutive slot anchors.
    pub fn stride(&self) -> f64 {
        self.stride
    }

    /// Anchor offset of `slot`.
    pub fn offset_of_slot(&self, slot: usize) -> f64 {
        slot as f64 * self.stride
    }

    /// Offset of the last slot anchor; the furthest the viewport may travel.
    pub fn max_offset(&self) -> f64 {
        self.slot_count.saturating_sub(1) as f64 * self.stride
    }

    /// Clamp an offset into `[0, max_offset]`.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Slot whose anchor is nearest to `offset`, clamped to the track.
    pub fn nearest_slot(&self, offset: f64) -> usize {
        if self.slot_count == 0 || self.stride <= 0.0 {
            return 0;
        }
        let raw = (self.clamp_offset(offset) / self.stride).round();
        (raw as usize).min(self.slot_count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items_of(track: &TrackBuffer) -> Vec<usize> {
        track.slots().iter().map(|s| s.item).collect()
    }

    #[test]
    fn empty_track_has_no_slots() {
        let track = TrackBuffer::new(0, 3);
        assert!(track.is_empty());
        assert_eq!(track.len(), 0);
    }

    #[test]
    fn eight_items_three_clones_layout() {
        let track = TrackBuffer::new(8, 3);
        assert_eq!(track.len(), 14);
        assert_eq!(
            items_of(&track),
            vec![5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2]
        );
        assert_eq!(track.real_range(), 3..11);
    }

    #[test]
    fn clone_kinds_are_marked() {
        let track = TrackBuffer::new(4, 2);
        let kinds: Vec<SlotKind> = track.slots().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SlotKind::HeadClone,
                SlotKind::HeadClone,
                SlotKind::Real,
                SlotKind::Real,
                SlotKind::Real,
                SlotKind::Real,
                SlotKind::TailClone,
                SlotKind::TailClone,
            ]
        );
    }

    #[test]
    fn fewer_items_than_clones_wraps_cyclically() {
        let track = TrackBuffer::new(2, 3);
        assert_eq!(track.len(), 8);
        assert_eq!(items_of(&track), vec![1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn render_ids_are_distinct() {
        let track = TrackBuffer::new(5, 3);
        let mut ids: Vec<RenderId> = track.slots().iter().map(|s| s.render_id).collect();
        ids.dedup();
        assert_eq!(ids.len(), track.len());
    }

    #[test]
    fn zero_clones_is_just_the_items() {
        let track = TrackBuffer::new(3, 0);
        assert_eq!(items_of(&track), vec![0, 1, 2]);
        assert!(track.slots().iter().all(|s| !s.is_clone()));
    }

    #[test]
    fn geometry_nearest_slot_rounds_and_clamps() {
        let geometry = TrackGeometry::new(300.0, 14);
        assert_eq!(geometry.nearest_slot(900.0), 3);
        assert_eq!(geometry.nearest_slot(1049.0), 3);
        assert_eq!(geometry.nearest_slot(1051.0), 4);
        assert_eq!(geometry.nearest_slot(-500.0), 0);
        assert_eq!(geometry.nearest_slot(1.0e9), 13);
        assert_eq!(geometry.max_offset(), 3900.0);
    }
}

//! Pointer hit-testing against rendered slot rectangles.

use crate::core::{Point, Rect};

/// Find the slot under a point.
///
/// `bounds[i]` is the on-screen rectangle of slot `i`. Edges count as
/// inside; the first match wins if rectangles overlap.
#[must_use]
pub fn find_slot_at_point(bounds: &[Rect], point: Point) -> Option<usize> {
    bounds.iter().position(|rect| rect.contains(point))
}

/// Tracks the hovered slot across drag-move events so that the store is
/// only told about changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker {
    last: Option<usize>,
}

impl HoverTracker {
    /// Create a tracker with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported slot.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.last
    }

    /// Record the slot now under the pointer.
    ///
    /// Returns `Some(new)` when it differs from the last one, `None` otherwise.
    pub fn update(&mut self, slot: Option<usize>) -> Option<Option<usize>> {
        if slot == self.last {
            return None;
        }
        self.last = slot;
        Some(slot)
    }

    /// Forget the hovered slot. Returns whether anything was hovered.
    pub fn clear(&mut self) -> bool {
        self.last.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Vec<Rect> {
        (0..4).map(|i| Rect::new(i as f32 * 61.0, 100.0, 53.0, 53.0)).collect()
    }

    #[test]
    fn test_hit_each_slot() {
        let bounds = row();
        assert_eq!(find_slot_at_point(&bounds, Point::new(10.0, 120.0)), Some(0));
        assert_eq!(find_slot_at_point(&bounds, Point::new(70.0, 120.0)), Some(1));
        assert_eq!(find_slot_at_point(&bounds, Point::new(183.0, 153.0)), Some(3));
    }

    #[test]
    fn test_gaps_and_outside_miss() {
        let bounds = row();
        assert_eq!(find_slot_at_point(&bounds, Point::new(57.0, 120.0)), None);
        assert_eq!(find_slot_at_point(&bounds, Point::new(10.0, 99.0)), None);
        assert_eq!(find_slot_at_point(&[], Point::new(10.0, 120.0)), None);
    }

    #[test]
    fn test_edges_are_inside() {
        let bounds = row();
        assert_eq!(find_slot_at_point(&bounds, Point::new(53.0, 153.0)), Some(0));
        assert_eq!(find_slot_at_point(&bounds, Point::new(61.0, 100.0)), Some(1));
    }

    #[test]
    fn test_tracker_reports_changes_only() {
        let mut tracker = HoverTracker::new();

        assert_eq!(tracker.update(None), None);
        assert_eq!(tracker.update(Some(1)), Some(Some(1)));
        assert_eq!(tracker.update(Some(1)), None);
        assert_eq!(tracker.update(Some(2)), Some(Some(2)));
        assert_eq!(tracker.update(None), Some(None));
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_tracker_clear() {
        let mut tracker = HoverTracker::new();
        assert!(!tracker.clear());

        tracker.update(Some(0));
        assert!(tracker.clear());
        assert_eq!(tracker.current(), None);
    }
}

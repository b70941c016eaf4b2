//! The marker: a session-scoped pointer into the today view, rendered as a
//! horizontal rule under the row it points at ("everything above this line
//! is for today").
//!
//! The marker is never persisted, but every mutation that can shift storage
//! positions has to nudge it so it keeps pointing at the same conceptual
//! boundary. Each operation applies its own boundary test against the
//! todo's pre-mutation position; the constants differ per operation and
//! are load-bearing, so they live here in one place with the tests to pin
//! them down.

/// Offset of the marked row in the today view, or `None` when unset.
///
/// Kept signed: repeated corrections can push the marker below zero, at
/// which point it matches no row until it is set again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marker(Option<i64>);

impl Marker {
    pub fn new() -> Self {
        Marker(None)
    }

    pub fn set(&mut self, row: usize) {
        self.0 = Some(row as i64);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn position(&self) -> Option<i64> {
        self.0
    }

    /// True when the separator should be drawn under `row` of the today view.
    pub fn is_at(&self, row: usize) -> bool {
        self.0 == Some(row as i64)
    }

    /// Correction for complete, delete, deprioritize, and
    /// schedule-into-upcoming: a todo leaving position `pos` at or before
    /// `marker + 1` pulls the marker up by one.
    pub fn on_removed(&mut self, pos: usize) {
        if let Some(marker) = self.0 {
            if pos as i64 <= marker + 1 {
                self.0 = Some(marker - 1);
            }
        }
    }

    /// Correction for backlog: same direction as [`Marker::on_removed`] but
    /// with a tighter `pos <= marker` boundary.
    pub fn on_backlogged(&mut self, pos: usize) {
        if let Some(marker) = self.0 {
            if pos as i64 <= marker {
                self.0 = Some(marker - 1);
            }
        }
    }

    /// Correction for prioritize: a todo moving from below the marker to
    /// the head pushes the marker down by one.
    pub fn on_promoted(&mut self, pos: usize) {
        if let Some(marker) = self.0 {
            if pos as i64 > marker {
                self.0 = Some(marker + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_at(row: usize) -> Marker {
        let mut marker = Marker::new();
        marker.set(row);
        marker
    }

    #[test]
    fn unset_marker_ignores_all_corrections() {
        let mut marker = Marker::new();
        marker.on_removed(0);
        marker.on_backlogged(0);
        marker.on_promoted(5);
        assert_eq!(marker.position(), None);
        assert!(!marker.is_at(0));
    }

    #[test]
    fn removal_before_marker_decrements() {
        // Five items, marker under index 2; deleting index 0 moves the
        // boundary to 1, deleting index 4 leaves it alone.
        let mut marker = marker_at(2);
        marker.on_removed(0);
        assert_eq!(marker.position(), Some(1));
        marker.on_removed(4);
        assert_eq!(marker.position(), Some(1));
    }

    #[test]
    fn removal_boundary_is_marker_plus_one() {
        let mut marker = marker_at(2);
        marker.on_removed(3); // == marker + 1, still counts
        assert_eq!(marker.position(), Some(1));

        let mut marker = marker_at(2);
        marker.on_removed(4); // > marker + 1, does not
        assert_eq!(marker.position(), Some(2));
    }

    #[test]
    fn backlog_boundary_is_marker_itself() {
        let mut marker = marker_at(2);
        marker.on_backlogged(2); // == marker, counts
        assert_eq!(marker.position(), Some(1));

        let mut marker = marker_at(2);
        marker.on_backlogged(3); // == marker + 1, does not
        assert_eq!(marker.position(), Some(2));
    }

    #[test]
    fn promotion_from_below_increments() {
        let mut marker = marker_at(2);
        marker.on_promoted(4);
        assert_eq!(marker.position(), Some(3));
    }

    #[test]
    fn promotion_at_or_above_marker_is_a_no_op() {
        let mut marker = marker_at(2);
        marker.on_promoted(2);
        assert_eq!(marker.position(), Some(2));
        marker.on_promoted(0);
        assert_eq!(marker.position(), Some(2));
    }

    #[test]
    fn marker_can_go_negative_and_matches_nothing() {
        let mut marker = marker_at(0);
        marker.on_removed(0);
        assert_eq!(marker.position(), Some(-1));
        assert!(!marker.is_at(0));
        marker.on_removed(0);
        assert_eq!(marker.position(), Some(-2));
    }

    #[test]
    fn set_and_clear() {
        let mut marker = Marker::new();
        marker.set(3);
        assert!(marker.is_at(3));
        marker.clear();
        assert_eq!(marker.position(), None);
    }
}

//! Threefold-repetition detection.
//!
//! After every turn the session captures a snapshot of the full position
//! and records it; when an identical snapshot occurs for the third time
//! the match is drawn, the puzzle analog of chess's threefold-repetition
//! rule.

use serde::{Deserialize, Serialize};

use crate::core::CubeState;

/// A value-equal encoding of (overlay grid, sticker grid) across all six
/// faces in canonical face order. Used purely for equality comparison;
/// creatures and eggs are positional decorations of the same grids and do
/// not enter the encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot(Vec<u8>);

impl Snapshot {
    /// Capture the current position.
    #[must_use]
    pub fn capture(state: &CubeState) -> Self {
        let bytes = bincode::serialize(&(&state.overlay, &state.stickers))
            .expect("grid encoding is infallible");
        Self(bytes)
    }
}

/// Running history of post-turn snapshots for one match.
#[derive(Clone, Debug, Default)]
pub struct RepetitionTracker {
    history: im::Vector<Snapshot>,
}

impl RepetitionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot; returns true on its third (or later) occurrence.
    pub fn record(&mut self, snapshot: Snapshot) -> bool {
        self.history.push_back(snapshot);
        let last = self.history.back().expect("just pushed");
        self.history.iter().filter(|s| *s == last).count() >= 3
    }

    /// Forget all history (match reset).
    pub fn clear(&mut self) {
        self.history.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Face, Mark, TilePos};
    use crate::rotation::{rotate, Twist};

    #[test]
    fn test_snapshot_equality_by_value() {
        let state1 = CubeState::new();
        let state2 = CubeState::new();
        assert_eq!(Snapshot::capture(&state1), Snapshot::capture(&state2));
    }

    #[test]
    fn test_snapshot_sees_overlay_changes() {
        let mut state = CubeState::new();
        let fresh = Snapshot::capture(&state);

        state
            .place(TilePos::new(Face::Front, 0, 0), Mark::Nought)
            .unwrap();
        assert_ne!(Snapshot::capture(&state), fresh);
    }

    #[test]
    fn test_snapshot_restored_by_inverse_twist() {
        let mut state = CubeState::new();
        state
            .place(TilePos::new(Face::Front, 0, 0), Mark::Nought)
            .unwrap();
        let before = Snapshot::capture(&state);

        rotate(&mut state, Twist::U);
        assert_ne!(Snapshot::capture(&state), before);

        rotate(&mut state, Twist::UInv);
        assert_eq!(Snapshot::capture(&state), before);
    }

    #[test]
    fn test_third_occurrence_triggers() {
        let mut tracker = RepetitionTracker::new();
        let snapshot = Snapshot::capture(&CubeState::new());

        assert!(!tracker.record(snapshot.clone()));
        assert!(!tracker.record(snapshot.clone()));
        assert!(tracker.record(snapshot));
    }

    #[test]
    fn test_distinct_snapshots_do_not_accumulate() {
        let mut tracker = RepetitionTracker::new();
        let mut state = CubeState::new();

        assert!(!tracker.record(Snapshot::capture(&state)));
        state
            .place(TilePos::new(Face::Up, 0, 0), Mark::Cross)
            .unwrap();
        assert!(!tracker.record(Snapshot::capture(&state)));
        state
            .place(TilePos::new(Face::Up, 0, 1), Mark::Cross)
            .unwrap();
        assert!(!tracker.record(Snapshot::capture(&state)));
        assert_eq!(tracker.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut tracker = RepetitionTracker::new();
        let snapshot = Snapshot::capture(&CubeState::new());
        tracker.record(snapshot.clone());
        tracker.record(snapshot.clone());

        tracker.clear();

        assert!(tracker.is_empty());
        assert!(!tracker.record(snapshot));
    }
}

//! Event-sequence helpers.
//!
//! Structural checks over the events a search emits.

use queenstep_core::{Assignment, EventKind, SearchEvent};

/// Snapshots of every `Solution` event, in order.
pub fn solutions(events: &[SearchEvent]) -> Vec<Assignment> {
    events
        .iter()
        .filter(|e| e.is_solution())
        .map(|e| e.snapshot().clone())
        .collect()
}

/// Number of events of the given kind.
pub fn count_kind(events: &[SearchEvent], kind: EventKind) -> usize {
    events.iter().filter(|e| e.kind() == kind).count()
}

/// `(kind, row, col)` triples for placements and removals, in order.
pub fn positions(events: &[SearchEvent]) -> Vec<(EventKind, usize, usize)> {
    events
        .iter()
        .filter_map(|e| e.position().map(|(row, col)| (e.kind(), row, col)))
        .collect()
}

/// Snapshots of every `Place` event, in order.
pub fn placement_snapshots(events: &[SearchEvent]) -> Vec<Assignment> {
    events
        .iter()
        .filter(|e| e.kind() == EventKind::Place)
        .map(|e| e.snapshot().clone())
        .collect()
}

/// Asserts depth-first place/undo discipline.
///
/// Every `Place` must fill the next row down, every `Remove` must undo the
/// most recent unmatched `Place` at the same row and column, and every
/// snapshot must agree with the replayed board.
pub fn assert_stack_discipline(events: &[SearchEvent]) {
    let mut stack: Vec<(usize, usize)> = Vec::new();
    for (i, event) in events.iter().enumerate() {
        match *event {
            SearchEvent::Place { row, col, .. } => {
                assert_eq!(row, stack.len(), "event {i}: place skips a row");
                stack.push((row, col));
            }
            SearchEvent::Remove { row, col, .. } => {
                assert_eq!(
                    stack.pop(),
                    Some((row, col)),
                    "event {i}: remove does not match the last place"
                );
            }
            SearchEvent::Solution { .. } => {
                assert!(event.snapshot().is_complete(), "event {i}: partial solution");
            }
        }
        let replayed: Vec<(usize, usize)> = event.snapshot().placements().collect();
        assert_eq!(replayed, stack, "event {i}: snapshot disagrees with replay");
    }
}

//! Search events.
//!
//! Every decision a search makes reaches the outside world as a
//! [`SearchEvent`]. Each event owns a snapshot of the board taken at the
//! moment it was emitted, so later progress of the search never changes an
//! event already handed out.

use std::fmt;

use crate::board::Assignment;

/// Discriminant of a [`SearchEvent`], useful for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Place,
    Remove,
    Solution,
}

/// A single observable decision made by a search.
///
/// # Examples
///
/// ```
/// use queenstep_core::{Assignment, EventKind, SearchEvent};
///
/// let snapshot = Assignment::from_columns(&[0]).unwrap();
/// let event = SearchEvent::Solution { snapshot };
///
/// assert!(event.is_solution());
/// assert_eq!(event.kind(), EventKind::Solution);
/// assert_eq!(event.position(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum SearchEvent {
    /// A queen was newly assigned at `row`.
    Place {
        row: usize,
        col: usize,
        snapshot: Assignment,
    },

    /// A previously placed queen at `row` was undone.
    /// The snapshot is taken after the undo.
    Remove {
        row: usize,
        col: usize,
        snapshot: Assignment,
    },

    /// `snapshot` is a complete, conflict-free assignment.
    Solution { snapshot: Assignment },
}

impl SearchEvent {
    /// Returns the kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            SearchEvent::Place { .. } => EventKind::Place,
            SearchEvent::Remove { .. } => EventKind::Remove,
            SearchEvent::Solution { .. } => EventKind::Solution,
        }
    }

    /// Returns the board snapshot carried by this event.
    pub fn snapshot(&self) -> &Assignment {
        match self {
            SearchEvent::Place { snapshot, .. }
            | SearchEvent::Remove { snapshot, .. }
            | SearchEvent::Solution { snapshot } => snapshot,
        }
    }

    /// Consumes the event, returning its snapshot.
    pub fn into_snapshot(self) -> Assignment {
        match self {
            SearchEvent::Place { snapshot, .. }
            | SearchEvent::Remove { snapshot, .. }
            | SearchEvent::Solution { snapshot } => snapshot,
        }
    }

    /// Returns `(row, col)` for placements and removals.
    pub fn position(&self) -> Option<(usize, usize)> {
        match *self {
            SearchEvent::Place { row, col, .. } | SearchEvent::Remove { row, col, .. } => {
                Some((row, col))
            }
            SearchEvent::Solution { .. } => None,
        }
    }

    /// Returns true for [`SearchEvent::Solution`].
    #[inline]
    pub fn is_solution(&self) -> bool {
        matches!(self, SearchEvent::Solution { .. })
    }
}

impl fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEvent::Place { row, col, snapshot } => {
                write!(f, "place row={row} col={col} {snapshot}")
            }
            SearchEvent::Remove { row, col, snapshot } => {
                write!(f, "remove row={row} col={col} {snapshot}")
            }
            SearchEvent::Solution { snapshot } => write!(f, "solution {snapshot}"),
        }
    }
}

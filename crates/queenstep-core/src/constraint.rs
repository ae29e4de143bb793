//! Placement legality.
//!
//! [`is_safe`] is the single source of truth for whether a queen may be
//! placed. Both searches gate every placement on it.

use crate::board::Assignment;

/// Whether two placed queens attack each other.
#[inline]
fn attacks((r1, c1): (usize, usize), (r2, c2): (usize, usize)) -> bool {
    c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2)
}

/// Checks whether a queen at `(row, col)` is safe against every queen
/// placed in a row strictly before `row`.
///
/// Unassigned rows are ignored. Rows at or after `row` are never examined.
///
/// # Examples
///
/// ```
/// use queenstep_core::{is_safe, Assignment};
///
/// let board = Assignment::from_cells(vec![Some(1), None, None, None]).unwrap();
///
/// assert!(!is_safe(&board, 1, 1)); // same column
/// assert!(!is_safe(&board, 1, 0)); // diagonal
/// assert!(is_safe(&board, 1, 3));
/// ```
pub fn is_safe(assignment: &Assignment, row: usize, col: usize) -> bool {
    assignment
        .cells()
        .iter()
        .take(row)
        .enumerate()
        .all(|(r, cell)| match *cell {
            Some(c) => !attacks((r, c), (row, col)),
            None => true,
        })
}

/// Checks that no two placed queens attack each other.
pub fn is_conflict_free(assignment: &Assignment) -> bool {
    let queens: Vec<(usize, usize)> = assignment.placements().collect();
    queens.iter().enumerate().all(|(i, &a)| {
        queens[i + 1..].iter().all(|&b| !attacks(a, b))
    })
}

/// Checks that every row holds a queen and none attack each other.
pub fn is_solution(assignment: &Assignment) -> bool {
    assignment.is_complete() && is_conflict_free(assignment)
}

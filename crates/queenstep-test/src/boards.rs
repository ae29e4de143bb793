//! Board fixtures.
//!
//! Builders for [`Assignment`]s plus reference data about the N-Queens
//! problem used to check search output.
//!
//! # Example
//!
//! ```
//! use queenstep_test::boards::{assert_conflict_free, full_board, known_solution_count};
//!
//! assert_conflict_free(&full_board(&[1, 3, 0, 2]));
//! assert_eq!(known_solution_count(8), Some(92));
//! ```

use queenstep_core::{is_conflict_free, Assignment, BoardSize};

/// Builds a board size, panicking on zero.
pub fn size(n: usize) -> BoardSize {
    BoardSize::new(n).expect("test board size must be positive")
}

/// Builds a partial board; `None` marks an unassigned row.
pub fn board(cells: &[Option<usize>]) -> Assignment {
    Assignment::from_cells(cells.to_vec()).expect("test board must be well formed")
}

/// Builds a complete board from one column per row.
pub fn full_board(columns: &[usize]) -> Assignment {
    Assignment::from_columns(columns).expect("test board must be well formed")
}

/// Number of distinct solutions for small boards.
pub fn known_solution_count(n: usize) -> Option<usize> {
    const COUNTS: [usize; 10] = [1, 0, 0, 2, 10, 4, 40, 92, 352, 724];
    n.checked_sub(1).and_then(|i| COUNTS.get(i).copied())
}

/// Asserts that every pair of placed queens is conflict free, checking
/// columns and both diagonals pairwise.
pub fn assert_conflict_free(assignment: &Assignment) {
    let queens: Vec<(usize, usize)> = assignment.placements().collect();
    for (i, &(r1, c1)) in queens.iter().enumerate() {
        for &(r2, c2) in &queens[i + 1..] {
            assert_ne!(c1, c2, "rows {r1} and {r2} share column {c1} in {assignment}");
            assert_ne!(
                r1.abs_diff(r2),
                c1.abs_diff(c2),
                "rows {r1} and {r2} share a diagonal in {assignment}"
            );
        }
    }
    assert!(is_conflict_free(assignment));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_counts() {
        assert_eq!(known_solution_count(0), None);
        assert_eq!(known_solution_count(1), Some(1));
        assert_eq!(known_solution_count(3), Some(0));
        assert_eq!(known_solution_count(6), Some(4));
        assert_eq!(known_solution_count(11), None);
    }

    #[test]
    fn test_builders() {
        assert_eq!(board(&[Some(0), None]).assigned_count(), 1);
        assert!(full_board(&[0]).is_complete());
        assert_eq!(size(3).get(), 3);
    }

    #[test]
    #[should_panic]
    fn test_conflict_is_detected() {
        assert_conflict_free(&full_board(&[0, 1, 2, 3]));
    }
}

//! Depth-first backtracking search.
//!
//! Rows are filled top to bottom and columns tried in ascending order. Every
//! placement, every undo and every completed board is announced as an event.
//!
//! The recursion of the classic algorithm is kept on an explicit stack of
//! [`Frame`]s so the search can hand back control after each event and resume
//! exactly where it stopped on the next pull.

use std::iter::FusedIterator;

use queenstep_core::{is_safe, Assignment, BoardSize, SearchEvent, SearchStrategy};

use crate::search::{log_search_end, log_search_start, log_step, StepwiseSearch};
use crate::stats::SearchStats;

/// One level of the depth-first recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    /// Row this frame is filling. `row == N` marks a completed board.
    row: usize,
    /// Next column to try in `row`.
    next_col: usize,
    /// Column currently placed by this frame, pending its `Remove`.
    placed: Option<usize>,
}

impl Frame {
    fn new(row: usize) -> Self {
        Self {
            row,
            next_col: 0,
            placed: None,
        }
    }
}

/// Stepwise depth-first search.
///
/// # Example
///
/// ```
/// use queenstep_core::{BoardSize, SearchEvent};
/// use queenstep_solver::BacktrackingSearch;
///
/// let search = BacktrackingSearch::new(BoardSize::new(4).unwrap(), true);
/// let last = search.last().unwrap();
///
/// assert!(last.is_solution());
/// assert_eq!(last.snapshot().to_string(), "[1, 3, 0, 2]");
/// ```
#[derive(Debug)]
pub struct BacktrackingSearch {
    size: BoardSize,
    stop_at_first: bool,
    /// Live board, mutated in place.
    assignment: Assignment,
    frames: Vec<Frame>,
    finished: bool,
    stats: SearchStats,
}

impl BacktrackingSearch {
    /// Creates a search over an all-unassigned board.
    pub fn new(size: BoardSize, stop_at_first: bool) -> Self {
        log_search_start(SearchStrategy::Backtracking, size, stop_at_first);

        let mut frames = Vec::with_capacity(size.get() + 1);
        frames.push(Frame::new(0));

        let mut stats = SearchStats::default();
        stats.start();

        Self {
            size,
            stop_at_first,
            assignment: Assignment::empty(size),
            frames,
            finished: false,
            stats,
        }
    }

    /// The live board. Differs from the snapshots already handed out as
    /// the search moves on.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Current recursion depth (number of pending frames).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            self.frames.clear();
            log_search_end(SearchStrategy::Backtracking, self.size, &self.stats);
        }
    }

    /// Resumes the frame stack until the next event.
    fn advance(&mut self) -> Option<SearchEvent> {
        let n = self.size.get();

        loop {
            let Some(frame) = self.frames.last_mut() else {
                self.finish();
                return None;
            };
            let row = frame.row;

            if row == n {
                self.frames.pop();
                self.stats.record_solution();
                let event = SearchEvent::Solution {
                    snapshot: self.assignment.clone(),
                };
                if self.stop_at_first {
                    self.finish();
                }
                return Some(event);
            }

            // Returning from the subtree below the current placement.
            if let Some(col) = frame.placed.take() {
                self.assignment.unplace(row);
                self.stats.record_removal();
                return Some(SearchEvent::Remove {
                    row,
                    col,
                    snapshot: self.assignment.clone(),
                });
            }

            let mut found = None;
            while frame.next_col < n {
                let col = frame.next_col;
                frame.next_col += 1;
                self.stats.record_safety_check();
                if is_safe(&self.assignment, row, col) {
                    found = Some(col);
                    break;
                }
            }

            match found {
                Some(col) => {
                    frame.placed = Some(col);
                    self.assignment.place(row, col);
                    self.frames.push(Frame::new(row + 1));
                    self.stats.record_placement(row + 1);
                    return Some(SearchEvent::Place {
                        row,
                        col,
                        snapshot: self.assignment.clone(),
                    });
                }
                None => {
                    self.frames.pop();
                }
            }
        }
    }
}

impl Iterator for BacktrackingSearch {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        if self.finished {
            return None;
        }
        let event = self.advance()?;
        log_step(SearchStrategy::Backtracking, &event);
        Some(event)
    }
}

impl FusedIterator for BacktrackingSearch {}

impl StepwiseSearch for BacktrackingSearch {
    fn strategy(&self) -> SearchStrategy {
        SearchStrategy::Backtracking
    }

    fn size(&self) -> BoardSize {
        self.size
    }

    fn stop_at_first(&self) -> bool {
        self.stop_at_first
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "backtracking_tests.rs"]
mod tests;

//! Best-first search over partial assignments.
//!
//! States are ordered by `(f, g, sequence)` where `g` counts placed queens,
//! `h` counts empty rows and `f = g + h`. The insertion sequence number only
//! breaks ties, which keeps the expansion order deterministic.
//!
//! Improvements to a known state are pushed as new entries; the superseded
//! entry is recognised as stale when popped and skipped (lazy deletion).
//! Only popped states are announced, so an observer never sees children that
//! are queued and never expanded.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::iter::FusedIterator;

use queenstep_core::{is_safe, Assignment, BoardSize, SearchEvent, SearchStrategy};
use tracing::debug;

use crate::search::{log_search_end, log_search_start, log_step, StepwiseSearch};
use crate::stats::SearchStats;

/// Admissible estimate of the placements still needed.
#[inline]
pub fn remaining_rows(state: &Assignment) -> usize {
    state.unassigned_count()
}

/// A queued partial assignment.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    f: usize,
    g: usize,
    sequence: u64,
    /// The placement that produced this state; `None` for the root.
    placed: Option<(usize, usize)>,
    state: Assignment,
}

impl FrontierEntry {
    fn root(state: Assignment) -> Self {
        Self {
            f: remaining_rows(&state),
            g: 0,
            sequence: 0,
            placed: None,
            state,
        }
    }

    fn child(parent_g: usize, sequence: u64, row: usize, col: usize, state: Assignment) -> Self {
        let g = parent_g + 1;
        Self {
            f: g + remaining_rows(&state),
            g,
            sequence,
            placed: Some((row, col)),
            state,
        }
    }

    /// Estimated total cost.
    #[inline]
    pub fn f(&self) -> usize {
        self.f
    }

    /// Queens placed so far.
    #[inline]
    pub fn g(&self) -> usize {
        self.g
    }

    /// Insertion order, used only to break ties.
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The queued board.
    #[inline]
    pub fn state(&self) -> &Assignment {
        &self.state
    }

    fn key(&self) -> (usize, usize, u64) {
        (self.f, self.g, self.sequence)
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, the smallest key pops first.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stepwise best-first search.
///
/// # Example
///
/// ```
/// use queenstep_core::BoardSize;
/// use queenstep_solver::BestFirstSearch;
///
/// let search = BestFirstSearch::new(BoardSize::new(3).unwrap(), true);
/// assert!(search.filter(|e| e.is_solution()).next().is_none());
/// ```
#[derive(Debug)]
pub struct BestFirstSearch {
    size: BoardSize,
    stop_at_first: bool,
    frontier: BinaryHeap<FrontierEntry>,
    /// Best known `g` per state.
    scores: HashMap<Assignment, usize>,
    next_sequence: u64,
    /// Popped entry whose `Place` was emitted but which is not yet expanded.
    pending: Option<FrontierEntry>,
    finished: bool,
    stats: SearchStats,
}

impl BestFirstSearch {
    /// Creates a search whose frontier holds only the empty board.
    pub fn new(size: BoardSize, stop_at_first: bool) -> Self {
        log_search_start(SearchStrategy::BestFirst, size, stop_at_first);

        let mut stats = SearchStats::default();
        stats.start();

        let root = FrontierEntry::root(Assignment::empty(size));
        let mut scores = HashMap::new();
        scores.insert(root.state.clone(), root.g);

        let mut frontier = BinaryHeap::new();
        frontier.push(root);
        stats.record_push(frontier.len());

        Self {
            size,
            stop_at_first,
            frontier,
            scores,
            next_sequence: 1,
            pending: None,
            finished: false,
            stats,
        }
    }

    /// Number of queued entries, stale ones included.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Best known `g` for `state`, if it has been reached.
    pub fn best_g(&self, state: &Assignment) -> Option<usize> {
        self.scores.get(state).copied()
    }

    /// Peeks at the entry that would be popped next.
    pub fn peek(&self) -> Option<&FrontierEntry> {
        self.frontier.peek()
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            self.pending = None;
            log_search_end(SearchStrategy::BestFirst, self.size, &self.stats);
        }
    }

    fn is_stale(&self, entry: &FrontierEntry) -> bool {
        self.scores
            .get(&entry.state)
            .is_some_and(|&best| entry.g > best)
    }

    /// Goal test and expansion of a popped entry.
    ///
    /// Returns the `Solution` event for a complete board; otherwise queues
    /// the safe children of the first empty row.
    fn settle(&mut self, entry: FrontierEntry) -> Option<SearchEvent> {
        let Some(row) = entry.state.first_unassigned() else {
            self.stats.record_solution();
            if self.stop_at_first {
                self.finish();
            }
            return Some(SearchEvent::Solution {
                snapshot: entry.state,
            });
        };

        for col in 0..self.size.get() {
            self.stats.record_safety_check();
            if !is_safe(&entry.state, row, col) {
                continue;
            }
            let child = entry.state.with_placement(row, col);
            let g2 = entry.g + 1;

            let improved = match self.scores.entry(child.clone()) {
                Entry::Occupied(mut known) if g2 < *known.get() => {
                    known.insert(g2);
                    true
                }
                Entry::Occupied(_) => false,
                Entry::Vacant(slot) => {
                    slot.insert(g2);
                    true
                }
            };
            if improved {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                self.frontier
                    .push(FrontierEntry::child(entry.g, sequence, row, col, child));
                self.stats.record_push(self.frontier.len());
            }
        }
        None
    }

    fn advance(&mut self) -> Option<SearchEvent> {
        if let Some(entry) = self.pending.take() {
            if let Some(event) = self.settle(entry) {
                return Some(event);
            }
        }

        while let Some(entry) = self.frontier.pop() {
            if self.is_stale(&entry) {
                self.stats.record_stale();
                debug!(
                    event = "stale_entry",
                    g = entry.g,
                    sequence = entry.sequence,
                    state = %entry.state,
                );
                continue;
            }
            self.stats.record_expansion();
            debug_assert_eq!(entry.g, entry.state.assigned_count());
            debug_assert_eq!(entry.f, self.size.get());

            if let Some((row, col)) = entry.placed {
                debug_assert_eq!(row + 1, entry.g);
                self.stats.record_placement(entry.g);
                let event = SearchEvent::Place {
                    row,
                    col,
                    snapshot: entry.state.clone(),
                };
                self.pending = Some(entry);
                return Some(event);
            }

            if let Some(event) = self.settle(entry) {
                return Some(event);
            }
        }

        self.finish();
        None
    }
}

impl Iterator for BestFirstSearch {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        if self.finished {
            return None;
        }
        let event = self.advance()?;
        log_step(SearchStrategy::BestFirst, &event);
        Some(event)
    }
}

impl FusedIterator for BestFirstSearch {}

impl StepwiseSearch for BestFirstSearch {
    fn strategy(&self) -> SearchStrategy {
        SearchStrategy::BestFirst
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
#[path = "best_first_tests.rs"]
mod tests;

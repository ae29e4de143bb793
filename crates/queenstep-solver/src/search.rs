//! The seam shared by every stepwise search.
//!
//! A search is an [`Iterator`] of [`SearchEvent`]s. Each call to `next`
//! performs only the work needed to produce the next event; dropping the
//! iterator cancels the search.

use std::iter::FusedIterator;

use queenstep_core::{BoardSize, SearchEvent, SearchStrategy};
use tracing::{info, trace};

use crate::backtracking::BacktrackingSearch;
use crate::best_first::BestFirstSearch;
use crate::stats::SearchStats;

/// A pull-driven search producing one [`SearchEvent`] per `next` call.
pub trait StepwiseSearch: Iterator<Item = SearchEvent> {
    /// The strategy this search implements.
    fn strategy(&self) -> SearchStrategy;

    /// The board dimension being searched.
    fn size(&self) -> BoardSize;

    /// Whether the search ends after its first solution.
    fn stop_at_first(&self) -> bool;

    /// Statistics gathered so far.
    fn stats(&self) -> &SearchStats;

    /// Whether the search has reached its terminal state.
    ///
    /// Once true, `next` returns `None` forever.
    fn is_finished(&self) -> bool;
}

/// Either search, selected at runtime.
///
/// Returned by [`NQueens::produce_events`](crate::NQueens::produce_events).
#[derive(Debug)]
pub enum EventStream {
    Backtracking(BacktrackingSearch),
    BestFirst(BestFirstSearch),
}

impl Iterator for EventStream {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        match self {
            EventStream::Backtracking(search) => search.next(),
            EventStream::BestFirst(search) => search.next(),
        }
    }
}

impl FusedIterator for EventStream {}

impl StepwiseSearch for EventStream {
    fn strategy(&self) -> SearchStrategy {
        match self {
            EventStream::Backtracking(search) => search.strategy(),
            EventStream::BestFirst(search) => search.strategy(),
        }
    }

    fn size(&self) -> BoardSize {
        match self {
            EventStream::Backtracking(search) => search.size(),
            EventStream::BestFirst(search) => search.size(),
        }
    }

    fn stop_at_first(&self) -> bool {
        match self {
            EventStream::Backtracking(search) => search.stop_at_first(),
            EventStream::BestFirst(search) => search.stop_at_first(),
        }
    }

    fn stats(&self) -> &SearchStats {
        match self {
            EventStream::Backtracking(search) => search.stats(),
            EventStream::BestFirst(search) => search.stats(),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            EventStream::Backtracking(search) => search.is_finished(),
            EventStream::BestFirst(search) => search.is_finished(),
        }
    }
}

pub(crate) fn log_search_start(strategy: SearchStrategy, size: BoardSize, stop_at_first: bool) {
    info!(
        event = "search_start",
        strategy = %strategy,
        size = size.get(),
        stop_at_first = stop_at_first,
    );
}

pub(crate) fn log_step(strategy: SearchStrategy, step: &SearchEvent) {
    trace!(
        event = "step",
        strategy = %strategy,
        step = %step,
    );
}

pub(crate) fn log_search_end(strategy: SearchStrategy, size: BoardSize, stats: &SearchStats) {
    let outcome = if stats.solutions > 0 {
        "solved"
    } else {
        "exhausted"
    };
    info!(
        event = "search_end",
        strategy = %strategy,
        size = size.get(),
        outcome = outcome,
        duration_ms = stats.elapsed().as_millis() as u64,
        events = stats.events_emitted(),
        solutions = stats.solutions,
        safety_checks = stats.safety_checks,
        nodes_expanded = stats.nodes_expanded,
        stale_entries = stats.stale_entries,
        peak_frontier = stats.peak_frontier as u64,
        speed = stats.events_per_second(),
    );
}

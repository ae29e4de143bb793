//! Search statistics.
//!
//! Plain counters owned by a single search instance.

use std::time::{Duration, Instant};

/// Per-search statistics.
///
/// Tracks how much work a search has done so far. The counters only grow
/// while events are being pulled.
///
/// # Example
///
/// ```
/// use queenstep_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_safety_check();
/// stats.record_placement(1);
/// stats.record_removal();
///
/// assert_eq!(stats.safety_checks, 1);
/// assert_eq!(stats.placements, 1);
/// assert_eq!(stats.removals, 1);
/// assert_eq!(stats.events_emitted(), 2);
/// assert_eq!(stats.peak_depth, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Calls made to the constraint checker.
    pub safety_checks: u64,
    /// `Place` events emitted.
    pub placements: u64,
    /// `Remove` events emitted.
    pub removals: u64,
    /// `Solution` events emitted.
    pub solutions: u64,
    /// Frontier entries popped and expanded (best-first only).
    pub nodes_expanded: u64,
    /// Frontier entries discarded as stale (best-first only).
    pub stale_entries: u64,
    /// Entries pushed onto the frontier, root included (best-first only).
    pub frontier_pushes: u64,
    /// Largest frontier size observed (best-first only).
    pub peak_frontier: usize,
    /// Largest number of queens on the board at once.
    pub peak_depth: usize,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a constraint check.
    pub fn record_safety_check(&mut self) {
        self.safety_checks += 1;
    }

    /// Records a `Place` event with `depth` queens now on the board.
    pub fn record_placement(&mut self, depth: usize) {
        self.placements += 1;
        self.peak_depth = self.peak_depth.max(depth);
    }

    /// Records a `Remove` event.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Records a `Solution` event.
    pub fn record_solution(&mut self) {
        self.solutions += 1;
    }

    /// Records an expanded frontier entry.
    pub fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }

    /// Records a discarded stale frontier entry.
    pub fn record_stale(&mut self) {
        self.stale_entries += 1;
    }

    /// Records a frontier push, given the frontier size after the push.
    pub fn record_push(&mut self, frontier_len: usize) {
        self.frontier_pushes += 1;
        self.peak_frontier = self.peak_frontier.max(frontier_len);
    }

    /// Total events emitted so far.
    pub fn events_emitted(&self) -> u64 {
        self.placements + self.removals + self.solutions
    }

    /// Returns the events per second rate.
    pub fn events_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.events_emitted() as f64 / secs) as u64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_before_start_is_zero() {
        let stats = SearchStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert_eq!(stats.events_per_second(), 0);
    }

    #[test]
    fn test_frontier_peak() {
        let mut stats = SearchStats::default();
        stats.record_push(1);
        stats.record_push(4);
        stats.record_push(2);

        assert_eq!(stats.frontier_pushes, 3);
        assert_eq!(stats.peak_frontier, 4);
    }

    #[test]
    fn test_expansion_and_stale_counters() {
        let mut stats = SearchStats::default();
        stats.record_expansion();
        stats.record_expansion();
        stats.record_stale();
        stats.record_solution();

        assert_eq!(stats.nodes_expanded, 2);
        assert_eq!(stats.stale_entries, 1);
        assert_eq!(stats.events_emitted(), 1);
    }
}

//! The engine surface.
//!
//! [`NQueens`] holds only the validated board size. Every call that produces
//! events builds a fresh search with its own all-unassigned board, so runs
//! never share working state.

use queenstep_core::{BoardSize, QueensError, Result, SearchStrategy};

use crate::backtracking::BacktrackingSearch;
use crate::best_first::BestFirstSearch;
use crate::search::EventStream;

/// Stepwise N-Queens engine.
///
/// # Example
///
/// ```
/// use queenstep_core::SearchStrategy;
/// use queenstep_solver::NQueens;
///
/// let engine = NQueens::new(4).unwrap();
/// let solutions: Vec<_> = engine
///     .produce_events(SearchStrategy::BestFirst, false)
///     .filter(|e| e.is_solution())
///     .collect();
///
/// assert_eq!(solutions.len(), 2);
/// assert!(NQueens::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueens {
    size: BoardSize,
}

impl NQueens {
    /// Creates an engine for an `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::Configuration`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self::with_size(BoardSize::new(size)?))
    }

    /// Creates an engine from an already validated size.
    pub fn with_size(size: BoardSize) -> Self {
        Self { size }
    }

    /// The board dimension.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Starts a new search with the given strategy.
    pub fn produce_events(&self, strategy: SearchStrategy, stop_at_first: bool) -> EventStream {
        match strategy {
            SearchStrategy::Backtracking => EventStream::Backtracking(self.backtracking(stop_at_first)),
            SearchStrategy::BestFirst => EventStream::BestFirst(self.best_first(stop_at_first)),
        }
    }

    /// Starts a new depth-first backtracking search.
    pub fn backtracking(&self, stop_at_first: bool) -> BacktrackingSearch {
        BacktrackingSearch::new(self.size, stop_at_first)
    }

    /// Starts a new best-first search.
    pub fn best_first(&self, stop_at_first: bool) -> BestFirstSearch {
        BestFirstSearch::new(self.size, stop_at_first)
    }
}

impl TryFrom<i64> for NQueens {
    type Error = QueensError;

    fn try_from(size: i64) -> Result<Self> {
        Ok(Self::with_size(BoardSize::try_from(size)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::StepwiseSearch;

    #[test]
    fn test_rejects_non_positive_sizes() {
        assert!(matches!(NQueens::new(0), Err(QueensError::Configuration(_))));
        assert!(matches!(
            NQueens::try_from(-4i64),
            Err(QueensError::Configuration(_))
        ));
        assert_eq!(NQueens::try_from(6i64).unwrap().size().get(), 6);
    }

    #[test]
    fn test_produce_events_dispatches_strategy() {
        let engine = NQueens::new(5).unwrap();

        for strategy in SearchStrategy::all() {
            let stream = engine.produce_events(strategy, true);
            assert_eq!(stream.strategy(), strategy);
            assert_eq!(stream.size().get(), 5);
            assert!(stream.stop_at_first());
            assert!(!stream.is_finished());
        }
    }

    #[test]
    fn test_each_call_starts_fresh() {
        let engine = NQueens::new(4).unwrap();
        let mut first = engine.produce_events(SearchStrategy::Backtracking, true);
        first.next();
        first.next();

        let full: Vec<_> = engine
            .produce_events(SearchStrategy::Backtracking, true)
            .collect();
        let rest: Vec<_> = first.collect();

        assert_eq!(full.len(), 13);
        assert_eq!(rest.len(), 11);
        assert_eq!(&full[2..], rest.as_slice());
    }

    #[test]
    fn test_stream_reports_stats() {
        let engine = NQueens::new(4).unwrap();
        let mut stream = engine.produce_events(SearchStrategy::BestFirst, true);
        let emitted = stream.by_ref().count() as u64;

        assert!(stream.is_finished());
        assert_eq!(stream.stats().events_emitted(), emitted);
        assert_eq!(stream.stats().solutions, 1);
    }
}

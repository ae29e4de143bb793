//! queenstep - stepwise, replayable N-Queens search
//!
//! Pick a strategy, pull events one at a time, stop whenever you like.
//!
//! # Example
//!
//! ```rust
//! use queenstep::prelude::*;
//!
//! let engine = NQueens::new(4).unwrap();
//! let events: Vec<SearchEvent> = engine
//!     .produce_events(SearchStrategy::Backtracking, true)
//!     .collect();
//!
//! let last = events.last().unwrap();
//! assert!(last.is_solution());
//! assert_eq!(last.snapshot().to_string(), "[1, 3, 0, 2]");
//! ```

// Board state, legality and events
pub use queenstep_core::{
    is_conflict_free, is_safe, is_solution, Assignment, BoardSize, EventKind, QueensError,
    SearchEvent, SearchStrategy,
};

// Searches and the engine surface
pub use queenstep_solver::{
    attacking_pairs, BacktrackingSearch, BestFirstSearch, DisplayMetrics, EventStream, NQueens,
    ReplayOutcome, ReplayStep, Replayer, SearchStats, StepwiseSearch,
};

// Configuration
pub use queenstep_config::{ConfigError, ReplayConfig};

#[cfg(feature = "console")]
pub mod console;
mod logging;
mod solver;

pub use logging::init_logging;
pub use solver::{run_replay, ReplayReport};

pub mod prelude {
    pub use super::{
        Assignment, BoardSize, EventKind, NQueens, ReplayConfig, ReplayOutcome, Replayer,
        SearchEvent, SearchStrategy, StepwiseSearch,
    };
}

//! queenstep solver engine
//!
//! This crate provides the stepwise searches:
//! - Depth-first backtracking with explicit place/undo events
//! - Best-first search over partial assignments with lazy deletion
//! - The `NQueens` engine surface selecting between them
//! - A presenter-neutral replay driver
//! - Per-search statistics

pub mod backtracking;
pub mod best_first;
pub mod replay;
pub mod search;
pub mod solver;
pub mod stats;

pub use backtracking::BacktrackingSearch;
pub use best_first::{BestFirstSearch, FrontierEntry};
pub use replay::{attacking_pairs, DisplayMetrics, ReplayOutcome, ReplayStep, Replayer};
pub use search::{EventStream, StepwiseSearch};
pub use solver::NQueens;
pub use stats::SearchStats;

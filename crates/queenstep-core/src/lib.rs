//! queenstep core - board state, legality and search events
//!
//! This crate provides the leaf abstractions shared by every queenstep search:
//! - Board size and row-to-column assignments
//! - The constraint checker deciding whether a placement is safe
//! - The event vocabulary emitted by the stepwise searches
//! - The search strategy selector

pub mod board;
pub mod constraint;
pub mod error;
pub mod event;
pub mod strategy;


pub use board::{Assignment, BoardSize};
pub use constraint::{is_conflict_free, is_safe, is_solution};
pub use error::{QueensError, Result};
pub use event::{EventKind, SearchEvent};
pub use strategy::SearchStrategy;

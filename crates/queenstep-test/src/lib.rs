//! Shared test fixtures for queenstep crates.
//!
//! This crate provides board builders, reference data and event-sequence
//! checks. It depends only on `queenstep-core` so the search crates can use
//! it as a dev-dependency without a cycle.
//!
//! - [`boards`] - Assignment builders and known solutions
//! - [`events`] - Event-sequence helpers and structural checks
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! queenstep-test = { workspace = true }
//! ```

pub mod boards;
pub mod events;

pub use boards::{assert_conflict_free, board, full_board, known_solution_count, size};
pub use events::{
    assert_stack_discipline, count_kind, placement_snapshots, positions, solutions,
};

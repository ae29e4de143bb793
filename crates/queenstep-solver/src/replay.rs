//! Presenter-neutral replay driver.
//!
//! A [`Replayer`] pulls one event per [`step`](Replayer::step), keeps the
//! board an observer would currently display, and derives cosmetic metrics
//! from each snapshot. Nothing computed here feeds back into a search.

use queenstep_core::{Assignment, SearchEvent};
use tracing::info;

use crate::search::StepwiseSearch;

/// Counts pairs of placed queens sharing a column or a diagonal.
///
/// # Example
///
/// ```
/// use queenstep_core::Assignment;
/// use queenstep_solver::replay::attacking_pairs;
///
/// let board = Assignment::from_columns(&[0, 1, 2, 3]).unwrap();
/// assert_eq!(attacking_pairs(&board), 6);
/// ```
pub fn attacking_pairs(assignment: &Assignment) -> usize {
    let queens: Vec<(usize, usize)> = assignment.placements().collect();
    let mut count = 0;
    for (i, &(r1, c1)) in queens.iter().enumerate() {
        for &(r2, c2) in &queens[i + 1..] {
            if c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2) {
                count += 1;
            }
        }
    }
    count
}

/// Display-only figures for a snapshot.
///
/// `h` here is the cosmetic `ceil(attacking_pairs / (N - 1))`, not the
/// remaining-rows estimate the best-first search orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayMetrics {
    pub g: usize,
    pub h: usize,
    pub f: usize,
    pub attacking_pairs: usize,
}

impl DisplayMetrics {
    /// Derives the metrics of `snapshot`.
    pub fn from_snapshot(snapshot: &Assignment) -> Self {
        let g = snapshot.assigned_count();
        let attacking_pairs = attacking_pairs(snapshot);
        let h = match snapshot.len() {
            0 | 1 => 0,
            n => attacking_pairs.div_ceil(n - 1),
        };
        Self {
            g,
            h,
            f: g + h,
            attacking_pairs,
        }
    }
}

/// Where a replay stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayOutcome {
    /// More events may follow.
    Running,
    /// A `Solution` event was seen; no further events are pulled.
    Solved(Assignment),
    /// The search ended without a `Solution`.
    Exhausted,
}

impl ReplayOutcome {
    /// Whether the replay can make no further progress.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReplayOutcome::Running)
    }

    /// Short lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            ReplayOutcome::Running => "running",
            ReplayOutcome::Solved(_) => "solved",
            ReplayOutcome::Exhausted => "exhausted",
        }
    }
}

/// One pulled event with its position in the replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    /// 1-based step number.
    pub index: u64,
    pub event: SearchEvent,
    pub metrics: DisplayMetrics,
}

/// Drives a search one visible event at a time.
///
/// # Example
///
/// ```
/// use queenstep_solver::replay::{ReplayOutcome, Replayer};
/// use queenstep_solver::NQueens;
///
/// let engine = NQueens::new(4).unwrap();
/// let mut replay = Replayer::new(engine.backtracking(true));
///
/// let first = replay.step().unwrap();
/// assert_eq!(first.index, 1);
/// assert_eq!(first.event.position(), Some((0, 0)));
///
/// let outcome = replay.run(None);
/// assert!(matches!(outcome, ReplayOutcome::Solved(_)));
/// assert_eq!(replay.step_count(), 13);
/// ```
#[derive(Debug)]
pub struct Replayer<S> {
    search: S,
    steps: u64,
    board: Assignment,
    outcome: ReplayOutcome,
}

impl<S: StepwiseSearch> Replayer<S> {
    /// Wraps a freshly built search.
    pub fn new(search: S) -> Self {
        let board = Assignment::empty(search.size());
        Self {
            search,
            steps: 0,
            board,
            outcome: ReplayOutcome::Running,
        }
    }

    /// Pulls the next event.
    ///
    /// Returns `None` once the outcome is terminal.
    pub fn step(&mut self) -> Option<ReplayStep> {
        if self.outcome.is_terminal() {
            return None;
        }

        let Some(event) = self.search.next() else {
            self.outcome = ReplayOutcome::Exhausted;
            self.log_end();
            return None;
        };

        self.steps += 1;
        self.board = event.snapshot().clone();
        if event.is_solution() {
            self.outcome = ReplayOutcome::Solved(self.board.clone());
            self.log_end();
        }

        Some(ReplayStep {
            index: self.steps,
            metrics: DisplayMetrics::from_snapshot(&self.board),
            event,
        })
    }

    /// Steps until the outcome is terminal or `step_limit` steps have been
    /// taken in total.
    pub fn run(&mut self, step_limit: Option<u64>) -> ReplayOutcome {
        while step_limit.map_or(true, |limit| self.steps < limit) {
            if self.step().is_none() {
                break;
            }
        }
        self.outcome.clone()
    }

    /// Number of events pulled so far.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// The board as of the last pulled event.
    pub fn board(&self) -> &Assignment {
        &self.board
    }

    /// Current outcome.
    pub fn outcome(&self) -> &ReplayOutcome {
        &self.outcome
    }

    /// The wrapped search.
    pub fn search(&self) -> &S {
        &self.search
    }

    /// Unwraps the search.
    pub fn into_search(self) -> S {
        self.search
    }

    fn log_end(&self) {
        info!(
            event = "replay_end",
            strategy = %self.search.strategy(),
            outcome = self.outcome.label(),
            steps = self.steps,
            board = %self.board,
        );
    }
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;

//! Replay entry point that hides the engine wiring.

use queenstep_config::{ConfigError, ReplayConfig};
use queenstep_core::{BoardSize, SearchStrategy};
use queenstep_solver::{NQueens, ReplayOutcome, ReplayStep, Replayer, SearchStats, StepwiseSearch};
use tracing::info;

/// Summary of a finished (or step-limited) replay.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub strategy: SearchStrategy,
    pub size: BoardSize,
    pub outcome: ReplayOutcome,
    pub steps: u64,
    pub stats: SearchStats,
}

/// Builds the engine described by `config` and replays it, handing every
/// step to `on_step`.
///
/// # Errors
///
/// Returns [`ConfigError`] when the configuration is invalid; the replay
/// itself cannot fail.
///
/// # Example
///
/// ```
/// use queenstep::{run_replay, ReplayConfig, ReplayOutcome};
///
/// let config = ReplayConfig::new().with_size(4);
/// let mut seen = 0;
/// let report = run_replay(&config, |_| seen += 1).unwrap();
///
/// assert!(matches!(report.outcome, ReplayOutcome::Solved(_)));
/// assert_eq!(report.steps, 13);
/// assert_eq!(seen, 13);
/// ```
pub fn run_replay<F>(config: &ReplayConfig, mut on_step: F) -> Result<ReplayReport, ConfigError>
where
    F: FnMut(&ReplayStep),
{
    config.validate()?;
    let size = config.board_size()?;
    let engine = NQueens::with_size(size);

    info!(
        event = "replay_start",
        strategy = %config.strategy,
        size = size.get(),
        step_limit = config.step_limit.unwrap_or(0),
    );

    let mut replay = Replayer::new(engine.produce_events(config.strategy, config.stop_at_first));
    while config
        .step_limit
        .map_or(true, |limit| replay.step_count() < limit)
    {
        match replay.step() {
            Some(step) => on_step(&step),
            None => break,
        }
    }

    Ok(ReplayReport {
        strategy: config.strategy,
        size,
        outcome: replay.outcome().clone(),
        steps: replay.step_count(),
        stats: replay.search().stats().clone(),
    })
}

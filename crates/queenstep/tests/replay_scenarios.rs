//! End-to-end replays through the public facade.

use queenstep::prelude::*;
use queenstep::{run_replay, ConfigError, QueensError};
use queenstep_test::{assert_conflict_free, assert_stack_discipline, full_board, solutions};

fn events(n: usize, strategy: SearchStrategy, stop_at_first: bool) -> Vec<SearchEvent> {
    NQueens::new(n)
        .unwrap()
        .produce_events(strategy, stop_at_first)
        .collect()
}

#[test]
fn test_four_queens_backtracking_replay() {
    let config = ReplayConfig::new().with_size(4);
    let mut kinds = Vec::new();

    let report = run_replay(&config, |step| kinds.push(step.event.kind())).unwrap();

    assert_eq!(report.outcome, ReplayOutcome::Solved(full_board(&[1, 3, 0, 2])));
    assert_eq!(report.steps, 13);
    assert_eq!(kinds.len(), 13);
    assert_eq!(kinds.last(), Some(&EventKind::Solution));
    assert_eq!(report.stats.placements, 8);
    assert_eq!(report.stats.removals, 4);
}

#[test]
fn test_eight_queens_backtracking_is_reproducible() {
    let first = events(8, SearchStrategy::Backtracking, true);
    let second = events(8, SearchStrategy::Backtracking, true);

    assert_eq!(first, second);
    assert_eq!(solutions(&first), vec![full_board(&[0, 4, 7, 5, 2, 6, 1, 3])]);
    assert_stack_discipline(&first);
}

#[test]
fn test_single_queen_on_both_strategies() {
    for strategy in SearchStrategy::all() {
        let produced = events(1, strategy, true);

        assert_eq!(produced.len(), 2, "{strategy}");
        assert_eq!(produced[0].position(), Some((0, 0)));
        assert_eq!(produced[1], SearchEvent::Solution { snapshot: full_board(&[0]) });
    }
}

#[test]
fn test_three_queens_best_first_exhausts() {
    let config = ReplayConfig::new()
        .with_size(3)
        .with_strategy(SearchStrategy::BestFirst);
    let mut last_event = None;

    let report = run_replay(&config, |step| last_event = Some(step.event.clone())).unwrap();

    assert_eq!(report.outcome, ReplayOutcome::Exhausted);
    assert!(report.steps > 0);
    assert!(last_event.is_some_and(|e| !e.is_solution()));
    assert_eq!(report.stats.solutions, 0);
}

#[test]
fn test_classic_solution_counts() {
    for strategy in SearchStrategy::all() {
        for (n, expected) in [(4, 2), (6, 4), (8, 92)] {
            let found = solutions(&events(n, strategy, false));

            assert_eq!(found.len(), expected, "{strategy} n = {n}");
            found.iter().for_each(assert_conflict_free);
        }
    }
}

#[test]
fn test_step_limit_stops_replay_early() {
    let config = ReplayConfig::new().with_size(8).with_step_limit(5);
    let mut indices = Vec::new();

    let report = run_replay(&config, |step| indices.push(step.index)).unwrap();

    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert_eq!(report.steps, 5);
    assert_eq!(report.outcome, ReplayOutcome::Running);
}

#[test]
fn test_replay_metrics_follow_snapshots() {
    let config = ReplayConfig::new()
        .with_size(5)
        .with_strategy(SearchStrategy::BestFirst);

    run_replay(&config, |step| {
        let snapshot = step.event.snapshot();
        assert_eq!(step.metrics.g, snapshot.assigned_count());
        // Announced states are always conflict-free.
        assert_eq!(step.metrics.attacking_pairs, 0);
        assert_eq!(step.metrics.f, step.metrics.g);
    })
    .unwrap();
}

#[test]
fn test_non_positive_size_is_rejected() {
    for size in [0, -3] {
        let config = ReplayConfig::new().with_size(size);
        let err = run_replay(&config, |_| {}).unwrap_err();

        assert!(
            matches!(err, ConfigError::Queens(QueensError::Configuration(_))),
            "size {size}: {err}"
        );
    }
    assert!(NQueens::new(0).is_err());
}

#[test]
fn test_replayer_over_event_stream() {
    let engine = NQueens::new(6).unwrap();
    let mut replay = Replayer::new(engine.produce_events(SearchStrategy::BestFirst, true));

    let outcome = replay.run(None);

    let ReplayOutcome::Solved(board) = outcome else {
        panic!("expected a solution, got {outcome:?}");
    };
    assert_conflict_free(&board);
    assert_eq!(replay.board(), &board);
    assert!(replay.step().is_none());
    assert!(replay.search().is_finished());
}

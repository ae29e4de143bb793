//! Tests for the replay driver.

use super::*;
use crate::NQueens;
use queenstep_core::{EventKind, SearchStrategy};
use queenstep_test::{board, full_board};

#[test]
fn test_attacking_pairs() {
    assert_eq!(attacking_pairs(&board(&[None, None, None])), 0);
    assert_eq!(attacking_pairs(&full_board(&[1, 3, 0, 2])), 0);
    assert_eq!(attacking_pairs(&board(&[Some(0), None, Some(0)])), 1);
    assert_eq!(attacking_pairs(&board(&[Some(0), Some(1), None])), 1);
}

#[test]
fn test_display_metrics() {
    let metrics = DisplayMetrics::from_snapshot(&full_board(&[0, 1, 2, 3]));

    assert_eq!(metrics.g, 4);
    assert_eq!(metrics.attacking_pairs, 6);
    assert_eq!(metrics.h, 2);
    assert_eq!(metrics.f, 6);
    assert_eq!(
        DisplayMetrics::from_snapshot(&full_board(&[0])),
        DisplayMetrics {
            g: 1,
            h: 0,
            f: 1,
            attacking_pairs: 0
        }
    );
}

#[test]
fn test_replay_stops_at_solution() {
    let engine = NQueens::new(4).unwrap();
    let mut replay = Replayer::new(engine.backtracking(false));

    let outcome = replay.run(None);

    assert_eq!(outcome, ReplayOutcome::Solved(full_board(&[1, 3, 0, 2])));
    assert_eq!(replay.step_count(), 13);
    assert!(replay.step().is_none());
    assert!(!replay.search().is_finished());
}

#[test]
fn test_replay_reports_exhaustion() {
    for strategy in SearchStrategy::all() {
        let engine = NQueens::new(3).unwrap();
        let mut replay = Replayer::new(engine.produce_events(strategy, true));

        assert_eq!(replay.run(None), ReplayOutcome::Exhausted);
        assert!(replay.step_count() > 0);
        assert!(replay.step().is_none());
    }
}

#[test]
fn test_step_limit_leaves_replay_running() {
    let engine = NQueens::new(8).unwrap();
    let mut replay = Replayer::new(engine.best_first(true));

    assert_eq!(replay.run(Some(5)), ReplayOutcome::Running);
    assert_eq!(replay.step_count(), 5);
    assert_eq!(replay.board().assigned_count(), 1);

    // Resuming continues from where the limit stopped.
    replay.run(Some(7));
    assert_eq!(replay.step_count(), 7);
}

#[test]
fn test_steps_track_board_and_metrics() {
    let engine = NQueens::new(4).unwrap();
    let mut replay = Replayer::new(engine.backtracking(true));

    let first = replay.step().unwrap();
    let second = replay.step().unwrap();
    let third = replay.step().unwrap();

    assert_eq!(first.index, 1);
    assert_eq!(second.metrics.g, 2);
    assert_eq!(third.event.kind(), EventKind::Remove);
    assert_eq!(third.metrics.g, 1);
    assert_eq!(replay.board(), &board(&[Some(0), None, None, None]));
    assert_eq!(replay.outcome(), &ReplayOutcome::Running);
    assert_eq!(replay.outcome().label(), "running");
}

#[test]
fn test_into_search_keeps_stats() {
    let engine = NQueens::new(1).unwrap();
    let mut replay = Replayer::new(engine.best_first(true));
    replay.run(None);

    let search = replay.into_search();
    assert_eq!(search.stats().solutions, 1);
    assert!(search.is_finished());
}

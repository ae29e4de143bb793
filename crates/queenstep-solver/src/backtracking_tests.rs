//! Tests for the backtracking search.

use super::*;
use queenstep_core::EventKind;
use queenstep_test::{
    assert_conflict_free, assert_stack_discipline, board, count_kind, full_board,
    known_solution_count, positions, size, solutions,
};

fn run(n: usize, stop_at_first: bool) -> Vec<SearchEvent> {
    BacktrackingSearch::new(size(n), stop_at_first).collect()
}

#[test]
fn test_four_queens_first_solution() {
    let events = run(4, true);

    assert_eq!(solutions(&events), vec![full_board(&[1, 3, 0, 2])]);
    assert!(events.last().unwrap().is_solution());
}

#[test]
fn test_four_queens_exact_sequence() {
    use EventKind::{Place, Remove};

    let events = run(4, true);

    assert_eq!(
        positions(&events),
        vec![
            (Place, 0, 0),
            (Place, 1, 2),
            (Remove, 1, 2),
            (Place, 1, 3),
            (Place, 2, 1),
            (Remove, 2, 1),
            (Remove, 1, 3),
            (Remove, 0, 0),
            (Place, 0, 1),
            (Place, 1, 3),
            (Place, 2, 0),
            (Place, 3, 2),
        ]
    );
    assert_eq!(events.len(), 13);
}

#[test]
fn test_single_queen() {
    let events = run(1, true);

    assert_eq!(
        events,
        vec![
            SearchEvent::Place {
                row: 0,
                col: 0,
                snapshot: full_board(&[0]),
            },
            SearchEvent::Solution {
                snapshot: full_board(&[0]),
            },
        ]
    );
}

#[test]
fn test_single_queen_without_stopping_undoes_the_placement() {
    let events = run(1, false);

    assert_eq!(events.len(), 3);
    assert_eq!(
        events[2],
        SearchEvent::Remove {
            row: 0,
            col: 0,
            snapshot: board(&[None]),
        }
    );
}

#[test]
fn test_eight_queens_first_solution() {
    let events = run(8, true);
    let found = solutions(&events);

    assert_eq!(found.len(), 1);
    assert_conflict_free(&found[0]);
    assert_eq!(found[0], full_board(&[0, 4, 7, 5, 2, 6, 1, 3]));
}

#[test]
fn test_unsolvable_boards_end_without_solution() {
    for n in [2, 3] {
        for stop_at_first in [true, false] {
            let events = run(n, stop_at_first);

            assert!(!events.is_empty());
            assert_eq!(count_kind(&events, EventKind::Solution), 0);
            assert_eq!(
                count_kind(&events, EventKind::Place),
                count_kind(&events, EventKind::Remove)
            );
        }
    }
}

#[test]
fn test_all_solutions_are_found() {
    for n in 1..=8 {
        let found = solutions(&run(n, false));

        assert_eq!(Some(found.len()), known_solution_count(n), "n = {n}");
        for solution in &found {
            assert_conflict_free(solution);
        }
    }
}

#[test]
fn test_stack_discipline() {
    assert_stack_discipline(&run(6, false));
    assert_stack_discipline(&run(8, true));
    assert_stack_discipline(&run(3, true));
}

#[test]
fn test_runs_are_deterministic() {
    assert_eq!(run(6, false), run(6, false));
    assert_eq!(run(8, true), run(8, true));
}

#[test]
fn test_snapshots_are_not_aliased_to_live_board() {
    let mut search = BacktrackingSearch::new(size(4), true);
    let first = search.next().unwrap();
    let second = search.next().unwrap();
    let third = search.next().unwrap();

    assert_eq!(first.snapshot(), &board(&[Some(0), None, None, None]));
    assert_eq!(second.snapshot(), &board(&[Some(0), Some(2), None, None]));
    assert_eq!(third.snapshot(), &board(&[Some(0), None, None, None]));
    assert_eq!(search.assignment(), &board(&[Some(0), None, None, None]));
}

#[test]
fn test_pulls_are_lazy() {
    let mut search = BacktrackingSearch::new(size(8), false);
    search.next();

    assert_eq!(search.stats().placements, 1);
    assert_eq!(search.stats().safety_checks, 1);
    assert_eq!(search.depth(), 2);
    assert!(!search.is_finished());
}

#[test]
fn test_finished_search_stays_finished() {
    let mut search = BacktrackingSearch::new(size(4), true);
    while search.next().is_some() {}

    assert!(search.is_finished());
    assert_eq!(search.depth(), 0);
    assert!(search.next().is_none());
    assert!(search.next().is_none());
}

#[test]
fn test_stats_track_events() {
    let mut search = BacktrackingSearch::new(size(4), true);
    let emitted = search.by_ref().count() as u64;
    let stats = search.stats();

    assert_eq!(stats.events_emitted(), emitted);
    assert_eq!(stats.placements, 8);
    assert_eq!(stats.removals, 4);
    assert_eq!(stats.solutions, 1);
    assert_eq!(stats.peak_depth, 4);
    assert_eq!(stats.nodes_expanded, 0);
}

#[test]
fn test_every_event_stays_on_the_board() {
    for event in run(7, false) {
        assert_eq!(event.snapshot().len(), 7);
        if let Some((row, col)) = event.position() {
            assert!(row < 7 && col < 7);
        }
    }
}

// Integration tests for the history store.
//
// These tests drive `StateHistory` through the same sequences a UI produces:
// clicks adding positions, undo/redo shortcuts, and bulk resets.

use marker_history::{ErrorKind, HistoryConfig, HistoryError, StateHistory};

type Point = (f32, f32);

fn click(history: &mut StateHistory<Point>, x: f32, y: f32) {
    history.add_state((x, y));
}

// ── Full Workflow ──────────────────────────────────────────────────────

#[test]
fn test_click_undo_redo_round_trip() {
    let mut history = StateHistory::unbounded();
    click(&mut history, 10.0, 10.0);
    click(&mut history, 20.0, 20.0);
    click(&mut history, 30.0, 30.0);

    history.previous_state().unwrap();
    assert_eq!(history.current(), Some(&(20.0, 20.0)));
    history.previous_state().unwrap();
    assert_eq!(history.current(), Some(&(10.0, 10.0)));
    history.next_state().unwrap();
    assert_eq!(history.current(), Some(&(20.0, 20.0)));
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut history = StateHistory::unbounded();
    for i in 0..10 {
        click(&mut history, i as f32, i as f32);
    }

    let mut undo_count = 0;
    while history.previous_state().is_ok() {
        undo_count += 1;
    }
    assert_eq!(undo_count, 9);
    assert_eq!(history.current(), Some(&(0.0, 0.0)));

    let mut redo_count = 0;
    while history.next_state().is_ok() {
        redo_count += 1;
    }
    assert_eq!(redo_count, 9);
    assert_eq!(history.current(), Some(&(9.0, 9.0)));
}

#[test]
fn test_click_after_undo_starts_new_branch() {
    let mut history = StateHistory::unbounded();
    click(&mut history, 1.0, 1.0);
    click(&mut history, 2.0, 2.0);
    click(&mut history, 3.0, 3.0);
    history.previous_state().unwrap();
    history.previous_state().unwrap();

    click(&mut history, 4.0, 4.0);

    assert_eq!(*history.states(), [(4.0, 4.0), (1.0, 1.0)]);
    assert_eq!(
        history.next_state().unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
    history.previous_state().unwrap();
    assert_eq!(history.current(), Some(&(1.0, 1.0)));
}

#[test]
fn test_failed_operations_never_corrupt_history() {
    let mut history = StateHistory::unbounded();
    click(&mut history, 5.0, 5.0);

    assert!(history.next_state().is_err());
    assert!(history.previous_state().is_err());
    assert!(history.set_current_index(7).is_err());
    assert!(history.set_states(vec![(1.0, 1.0)], Some(1)).is_err());
    assert!(history.delete_state(3).is_err());

    assert_eq!(*history.states(), [(5.0, 5.0)]);
    assert_eq!(history.current_index(), 0);
}

#[test]
fn test_clear_then_reuse() {
    let mut history = StateHistory::unbounded();
    click(&mut history, 1.0, 1.0);
    click(&mut history, 2.0, 2.0);
    history.set_current_index(1).unwrap();

    history.clear_history();
    assert!(history.is_empty());
    assert_eq!(history.current_index(), 0);
    assert_eq!(history.previous_state(), Err(HistoryError::NoPreviousState));

    click(&mut history, 3.0, 3.0);
    assert_eq!(history.current(), Some(&(3.0, 3.0)));
}

// ── Bounded History ────────────────────────────────────────────────────

#[test]
fn test_bounded_history_keeps_newest_states() {
    let mut history = StateHistory::new(HistoryConfig::with_max_depth(100));
    for i in 0..1_000 {
        click(&mut history, i as f32, 0.0);
    }

    assert_eq!(history.len(), 100);
    assert_eq!(history.states().front(), Some(&(999.0, 0.0)));
    assert_eq!(history.states().back(), Some(&(900.0, 0.0)));
}

#[test]
fn test_bounded_history_branch_discard_then_cap() {
    let mut history = StateHistory::new(HistoryConfig::with_max_depth(3));
    click(&mut history, 1.0, 0.0);
    click(&mut history, 2.0, 0.0);
    click(&mut history, 3.0, 0.0);
    history.previous_state().unwrap();

    click(&mut history, 4.0, 0.0);
    click(&mut history, 5.0, 0.0);

    assert_eq!(*history.states(), [(5.0, 0.0), (4.0, 0.0), (2.0, 0.0)]);
}

// ── Deletion ───────────────────────────────────────────────────────────

#[test]
fn test_delete_every_state_one_by_one() {
    let mut history = StateHistory::unbounded();
    for i in 0..5 {
        click(&mut history, i as f32, 0.0);
    }
    history.set_current_index(4).unwrap();

    while !history.is_empty() {
        history.delete_state(0).unwrap();
        assert!(history.is_empty() || history.current().is_some());
    }
    assert_eq!(history.current_index(), 0);
    assert_eq!(history.current(), None);
}

// ── Non-Copy States ────────────────────────────────────────────────────

#[test]
fn test_history_of_owned_values() {
    let mut history: StateHistory<String> = StateHistory::unbounded();
    history.add_state("first".to_string());
    history.add_state("second".to_string());
    history.previous_state().unwrap();

    assert_eq!(history.current().map(String::as_str), Some("first"));
    let removed = history.delete_state(0).unwrap();
    assert_eq!(removed, "second");
    assert_eq!(history.current().map(String::as_str), Some("first"));
}

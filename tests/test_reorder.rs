//! Integration tests for the project reorder state machine.
//!
//! Tests cover:
//! - Single-element moves (remove then reinsert, not a swap)
//! - No-op drops writing nothing to the store
//! - Drag cancellation via drag_end
//! - Highlight state derived purely from the machine
//! - The persisted order matching the displayed one after every drop

mod common;

use common::*;
use folio::{DragState, Draft, ProjectBoard};
use uuid::Uuid;

#[test]
fn test_drag_first_onto_last_then_back() -> anyhow::Result<()> {
    // 1. [A, B, C]: drag A onto C
    let store = RecordingStore::default();
    let mut board = ProjectBoard::new(sample_record());
    let a = board.projects()[0].id;
    let c = board.projects()[2].id;

    board.drag_start(a);
    board.drag_over(c);
    assert!(board.drop_on(c, &store)?);
    assert_eq!(titles(board.record()), vec!["B", "C", "A"]);

    // 2. Drag A (now last) onto B (now first) to restore the original order
    let b = board.projects()[0].id;
    board.drag_start(a);
    assert!(board.drop_on(b, &store)?);
    assert_eq!(titles(board.record()), vec!["A", "B", "C"]);

    // 3. Both drops wrote the full record
    assert_eq!(store.save_count(), 2);
    assert_eq!(store.last_saved().unwrap(), *board.record());

    Ok(())
}

#[test]
fn test_move_preserves_relative_order_of_the_rest() -> anyhow::Result<()> {
    // Move the middle of five elements to the front; everyone else keeps
    // their relative order.
    let store = RecordingStore::default();
    let mut record = sample_record();
    record.projects.push(project_titled("D"));
    record.projects.push(project_titled("E"));
    let mut board = ProjectBoard::new(record);

    let c = board.projects()[2].id;
    let a = board.projects()[0].id;
    board.drag_start(c);
    assert!(board.drop_on(a, &store)?);

    assert_eq!(titles(board.record()), vec!["C", "A", "B", "D", "E"]);
    Ok(())
}

#[test]
fn test_dropping_on_the_source_writes_nothing() -> anyhow::Result<()> {
    let store = RecordingStore::default();
    let mut board = ProjectBoard::new(sample_record());
    let a = board.projects()[0].id;

    board.drag_start(a);
    assert!(!board.drop_on(a, &store)?);

    assert_eq!(titles(board.record()), vec!["A", "B", "C"]);
    assert_eq!(store.save_count(), 0);
    assert_eq!(board.drag_state(), DragState::Idle);

    Ok(())
}

#[test]
fn test_drag_end_without_a_drop_persists_nothing() -> anyhow::Result<()> {
    // 1. Start a drag and release it outside every card
    let store = RecordingStore::default();
    let mut board = ProjectBoard::new(sample_record());
    let a = board.projects()[0].id;
    let b = board.projects()[1].id;

    board.drag_start(a);
    board.drag_over(b);
    board.drag_end();

    // 2. Back to idle, order untouched, nothing written
    assert_eq!(board.drag_state(), DragState::Idle);
    assert_eq!(titles(board.record()), vec!["A", "B", "C"]);
    assert_eq!(store.save_count(), 0);

    // 3. A later drop without a fresh drag_start is also a no-op
    assert!(!board.drop_on(b, &store)?);
    assert_eq!(store.save_count(), 0);

    Ok(())
}

#[test]
fn test_unknown_ids_are_ignored() -> anyhow::Result<()> {
    let store = RecordingStore::default();
    let mut board = ProjectBoard::new(sample_record());
    let a = board.projects()[0].id;

    // Unknown source: the drag never starts
    board.drag_start(Uuid::new_v4());
    assert_eq!(board.drag_state(), DragState::Idle);

    // Unknown target: the drop falls through without touching the list
    board.drag_start(a);
    assert!(!board.drop_on(Uuid::new_v4(), &store)?);
    assert_eq!(titles(board.record()), vec!["A", "B", "C"]);
    assert_eq!(store.save_count(), 0);

    Ok(())
}

#[test]
fn test_highlights_follow_the_drag_state() {
    let mut board = ProjectBoard::new(sample_record());
    let a = board.projects()[0].id;
    let b = board.projects()[1].id;

    // Nothing highlighted while idle, even with hover noise
    board.drag_over(b);
    assert!(!board.is_drop_target(b));

    board.drag_start(a);
    assert!(board.is_drag_source(a));
    assert!(!board.is_drop_target(a));

    // Repeated hover events for the same target are fine
    board.drag_over(b);
    board.drag_over(b);
    assert!(board.is_drop_target(b));

    // The source never doubles as a drop target
    board.drag_over(a);
    assert!(!board.is_drop_target(a));

    board.drag_leave(a);
    board.drag_end();
    assert!(!board.is_drag_source(a));
    assert!(!board.is_drop_target(b));
}

#[test]
fn test_reordered_list_survives_a_reload() -> anyhow::Result<()> {
    // 1. Save through the editor, reorder through the board
    let (store, _dir) = temp_store();
    let draft = Draft::from_record(sample_record());
    draft.save(&store)?;

    let mut board = ProjectBoard::new(store.load()?.unwrap());
    let a = board.projects()[0].id;
    let c = board.projects()[2].id;
    board.drag_start(a);
    assert!(board.drop_on(c, &store)?);

    // 2. A fresh load from disk sees the new order
    let reloaded = store.load()?.unwrap();
    assert_eq!(titles(&reloaded), vec!["B", "C", "A"]);
    assert_eq!(&reloaded, board.record());

    Ok(())
}

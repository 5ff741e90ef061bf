//! Integration tests for the TaskMate store
//!
//! These tests verify the end-to-end behavior of the task list model:
//! validation on add, id uniqueness, idempotent deletes, toggle
//! round-trips, and search/visibility filtering.

use std::collections::HashSet;
use std::io::Write;

use proptest::prelude::*;
use tempfile::NamedTempFile;

use taskmate::domain::Task;
use taskmate::store::{TaskStore, ValidationError};

fn store_with(titles: &[&str]) -> TaskStore {
    TaskStore::from_tasks(titles.iter().copied().map(Task::new).collect())
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_add_rejects_three_chars_accepts_four() {
    let mut store = TaskStore::new();

    store.set_pending_input("abc");
    assert_eq!(store.add_task(), Err(ValidationError::TitleTooShort(3)));
    assert!(store.is_empty());

    store.set_pending_input("abcd");
    let task = store.add_task().expect("4 chars must be accepted");
    assert_eq!(store.len(), 1);
    assert!(!task.is_completed);
}

#[test]
fn test_add_hi_then_hello() {
    let mut store = TaskStore::new();

    store.set_pending_input("Hi");
    assert!(store.add_task().is_err());
    assert!(store.is_empty());
    assert!(store.attempted_add());
    assert!(store.validation_error().is_some());

    store.set_pending_input("Hello");
    store.add_task().expect("Hello is long enough");
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].title, "Hello");
    assert!(store.validation_error().is_none());
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_add_toggle_delete_round_trip() {
    let mut store = TaskStore::new();

    store.set_pending_input("Write tests");
    let task = store.add_task().unwrap();
    assert_eq!(store.len(), 1);
    assert!(!store.tasks()[0].is_completed);

    store.toggle_completed(task.id);
    assert!(store.tasks()[0].is_completed);

    store.delete_task(task.id);
    assert!(store.is_empty());
}

#[test]
fn test_delete_is_idempotent() {
    let mut store = store_with(&["Buy milk"]);
    let id = store.tasks()[0].id;

    store.delete_task(id);
    let after_first: Vec<String> = store.tasks().iter().map(|t| t.title.clone()).collect();

    store.delete_task(id);
    let after_second: Vec<String> = store.tasks().iter().map(|t| t.title.clone()).collect();
    assert_eq!(after_first, after_second);
}

#[test]
fn test_toggle_twice_restores_original() {
    let mut store = store_with(&["Buy milk"]);
    let id = store.tasks()[0].id;

    store.toggle_completed(id);
    store.toggle_completed(id);
    assert!(!store.get(id).unwrap().is_completed);
}

#[test]
fn test_edit_then_resubmit_creates_fresh_task() {
    let mut store = store_with(&["Buy milk"]);
    let original = store.tasks()[0].clone();

    store.begin_edit(original.id);
    assert!(store.is_empty());
    assert_eq!(store.pending_input(), "Buy milk");

    let recreated = store.add_task().unwrap();
    assert_eq!(recreated.title, original.title);
    assert_ne!(recreated.id, original.id);
}

// =============================================================================
// Search and visibility
// =============================================================================

#[test]
fn test_search_is_case_insensitive_substring() {
    let store = store_with(&["Buy milk", "clean house"]);

    let hits = store.filter_by_search("MIL");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Buy milk");
}

#[test]
fn test_empty_search_returns_full_list_in_order() {
    let store = store_with(&["Buy milk", "clean house", "water plants"]);

    let all = store.filter_by_search("");
    let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Buy milk", "clean house", "water plants"]);
}

#[test]
fn test_visibility_filter_gates_to_completed_only() {
    let mut store = store_with(&["Buy milk", "clean house"]);
    store.toggle_completed(store.tasks()[0].id);

    let gated = TaskStore::filter_by_visibility(store.filter_by_search(""), true);
    assert_eq!(gated.len(), 1);
    assert_eq!(gated[0].title, "Buy milk");

    let passthrough = TaskStore::filter_by_visibility(store.filter_by_search(""), false);
    assert_eq!(passthrough.len(), 2);
}

// =============================================================================
// Initial load
// =============================================================================

#[test]
fn test_load_initial_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{
            "id": "7f2c43a0-5b1a-4b6e-9a6a-2f8f6f8a9b10",
            "todo": "Buy milk",
            "description": "",
            "date": "2024-05-01T12:00:00.000Z",
            "isCompleted": false
        }}]"#
    )
    .unwrap();

    let mut store = TaskStore::new();
    assert_eq!(store.load_initial(file.path()), 1);
    assert_eq!(store.tasks()[0].title, "Buy milk");
}

#[test]
fn test_load_initial_missing_file_is_silent_empty() {
    let mut store = store_with(&["leftover"]);
    assert_eq!(store.load_initial(std::path::Path::new("/no/such/todos.json")), 0);
    assert!(store.is_empty());
}

// =============================================================================
// Id uniqueness property
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z ]{3,15}".prop_map(Op::Add),
        (0usize..16).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn prop_ids_stay_unique_under_add_delete(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = TaskStore::new();

        for op in ops {
            match op {
                Op::Add(title) => {
                    store.set_pending_input(title);
                    store.add_task().expect("generated titles are at least 4 chars");
                }
                Op::Delete(slot) => {
                    if !store.is_empty() {
                        let id = store.tasks()[slot % store.len()].id;
                        store.delete_task(id);
                    }
                }
            }

            let ids: HashSet<_> = store.tasks().iter().map(|t| t.id).collect();
            prop_assert_eq!(ids.len(), store.len());
        }
    }
}

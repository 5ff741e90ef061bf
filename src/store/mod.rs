//! In-memory task store
//!
//! Owns the ordered task list and the pending-input text. All list
//! mutation and querying goes through this type; the view only renders
//! what it returns. Single-threaded: each operation runs to completion
//! before the next event is handled.

mod loader;

pub use loader::load_tasks;

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{Task, TaskId};

/// Minimum title length (in chars) accepted by [`TaskStore::add_task`]
pub const MIN_TITLE_CHARS: usize = 4;

/// Errors from task validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must be at least {MIN_TITLE_CHARS} characters, got {0}")]
    TitleTooShort(usize),
}

/// Owner of the task list and the not-yet-committed input text
#[derive(Debug, Default)]
pub struct TaskStore {
    /// Ordered task list; insertion order is display order
    tasks: Vec<Task>,
    /// Text for the next task, held between keystrokes and submission
    pending_input: String,
    /// Whether an add has been attempted this session
    attempted_add: bool,
    /// Outcome of the most recent add attempt, cleared on success
    last_error: Option<ValidationError>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with tasks
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// Replace the entire list with tasks read from a JSON file.
    ///
    /// A missing or malformed file leaves the list empty; there is no
    /// retry and no user-visible error. Returns the number of tasks
    /// loaded.
    pub fn load_initial(&mut self, path: &Path) -> usize {
        match loader::load_tasks(path) {
            Ok(tasks) => {
                info!(count = tasks.len(), path = %path.display(), "Loaded initial tasks");
                self.tasks = tasks;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Initial load failed, starting empty");
                self.tasks.clear();
            }
        }
        self.tasks.len()
    }

    /// Record the current value of the not-yet-committed input text.
    /// No validation happens here.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// The not-yet-committed input text
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Commit the pending input as a new task.
    ///
    /// Titles of 3 or fewer characters are rejected and the list is left
    /// unchanged. On success the task is appended to the end of the list,
    /// the pending input is cleared, and any earlier validation feedback
    /// is dismissed.
    pub fn add_task(&mut self) -> Result<Task, ValidationError> {
        self.attempted_add = true;

        let len = self.pending_input.chars().count();
        if len < MIN_TITLE_CHARS {
            let err = ValidationError::TitleTooShort(len);
            self.last_error = Some(err.clone());
            return Err(err);
        }

        let task = Task::new(std::mem::take(&mut self.pending_input));
        let snapshot = task.clone();
        self.tasks.push(task);
        self.last_error = None;
        Ok(snapshot)
    }

    /// Pull a task out of the list for editing: the task is removed and
    /// its title becomes the pending input, to be resubmitted through
    /// [`add_task`](Self::add_task) as a new task. Description and
    /// completion state are discarded. No-op if the id is not present.
    pub fn begin_edit(&mut self, id: TaskId) {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            let task = self.tasks.remove(pos);
            self.pending_input = task.title;
        }
    }

    /// Remove the task with the given id; no-op if absent
    pub fn delete_task(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Flip the completion flag of the task with the given id; no-op if
    /// absent
    pub fn toggle_completed(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.toggle();
        }
    }

    /// Tasks whose title contains `query` as a case-insensitive
    /// substring, in list order. An empty query matches all.
    pub fn filter_by_search(&self, query: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.matches_search(query)).collect()
    }

    /// Gate a task sequence on completion state. When
    /// `show_completed_only` is true only completed tasks pass; when
    /// false the input is returned unchanged. The "Show Finished"
    /// control maps directly onto this flag.
    pub fn filter_by_visibility(tasks: Vec<&Task>, show_completed_only: bool) -> Vec<&Task> {
        if show_completed_only {
            tasks.into_iter().filter(|t| t.is_completed).collect()
        } else {
            tasks
        }
    }

    /// Search then visibility filter, in that order
    pub fn visible_tasks(&self, query: &str, show_completed_only: bool) -> Vec<&Task> {
        Self::filter_by_visibility(self.filter_by_search(query), show_completed_only)
    }

    /// Full list in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks in the list
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether an add has been attempted this session. The view uses
    /// this together with [`validation_error`](Self::validation_error)
    /// to decide whether to show feedback text.
    pub fn attempted_add(&self) -> bool {
        self.attempted_add
    }

    /// The validation failure from the most recent add attempt, if any
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }
}

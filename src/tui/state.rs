//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here. The task
//! list itself lives in the TaskStore; this module only adds view-side
//! state (mode, search text, selection, expansion).

use crate::domain::TaskId;
use crate::store::TaskStore;

/// Interaction mode (modal)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Editing the pending-input text (a/n or e keys)
    Input,
    /// Live search mode (/ key)
    Search,
    /// Help overlay
    Help,
}

/// Selection state for the task list
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    pub selected_index: usize,
}

impl SelectionState {
    pub fn select_next(&mut self, max_items: usize) {
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self, max_items: usize) {
        if max_items > 0 {
            self.selected_index = max_items - 1;
        }
    }

    /// Ensure selection is within bounds
    pub fn clamp(&mut self, max_items: usize) {
        if max_items == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= max_items {
            self.selected_index = max_items - 1;
        }
    }
}

/// Main TUI application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The task store; all list mutation goes through it
    pub store: TaskStore,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,
    /// Current search text (live filter on titles)
    pub search_text: String,
    /// "Show Finished" filter: when true, only completed tasks are listed
    pub show_finished: bool,
    /// Task with its detail pane expanded, if any
    pub expanded: Option<TaskId>,
    /// Selection within the visible list
    pub selection: SelectionState,
    /// Should the app quit
    pub should_quit: bool,
}

impl AppState {
    /// Create state around an already-loaded store
    pub fn new(store: TaskStore, show_finished: bool) -> Self {
        Self {
            store,
            show_finished,
            ..Self::default()
        }
    }

    /// Tasks currently visible: search filter then completion filter,
    /// in list order
    pub fn visible_tasks(&self) -> Vec<&crate::domain::Task> {
        self.store.visible_tasks(&self.search_text, self.show_finished)
    }

    /// Number of visible tasks
    pub fn visible_count(&self) -> usize {
        self.visible_tasks().len()
    }

    /// Id of the currently selected visible task
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.selection.selected_index).map(|t| t.id)
    }

    /// Expand the given task, or collapse it if already expanded
    pub fn toggle_expand(&mut self, id: TaskId) {
        if self.expanded == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }

    /// Drop stale view state after a mutation: clamp the selection to
    /// the visible list and collapse the detail pane if its task is gone
    pub fn sync_after_mutation(&mut self) {
        let count = self.visible_count();
        self.selection.clamp(count);
        if let Some(id) = self.expanded
            && self.store.get(id).is_none()
        {
            self.expanded = None;
        }
    }

    /// Whether validation feedback should be rendered under the input bar
    pub fn show_feedback(&self) -> bool {
        self.store.attempted_add() && self.store.validation_error().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;

    fn state_with(titles: &[&str]) -> AppState {
        let store = TaskStore::from_tasks(titles.iter().copied().map(Task::new).collect());
        AppState::new(store, false)
    }

    #[test]
    fn test_selection_state_navigation() {
        let mut selection = SelectionState::default();

        selection.select_next(10);
        assert_eq!(selection.selected_index, 1);

        selection.select_prev();
        assert_eq!(selection.selected_index, 0);

        // Can't go below 0
        selection.select_prev();
        assert_eq!(selection.selected_index, 0);

        selection.select_last(10);
        assert_eq!(selection.selected_index, 9);

        // Can't go past end
        selection.select_next(10);
        assert_eq!(selection.selected_index, 9);
    }

    #[test]
    fn test_visible_tasks_search_filter() {
        let mut state = state_with(&["Buy milk", "clean house"]);
        state.search_text = "mil".to_string();

        let visible = state.visible_tasks();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Buy milk");
    }

    #[test]
    fn test_visible_tasks_show_finished() {
        let mut state = state_with(&["Buy milk", "clean house"]);
        let id = state.store.tasks()[0].id;
        state.store.toggle_completed(id);
        state.show_finished = true;

        let visible = state.visible_tasks();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Buy milk");
    }

    #[test]
    fn test_toggle_expand() {
        let mut state = state_with(&["Buy milk"]);
        let id = state.store.tasks()[0].id;

        state.toggle_expand(id);
        assert_eq!(state.expanded, Some(id));

        state.toggle_expand(id);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_sync_after_mutation_clamps_selection() {
        let mut state = state_with(&["Buy milk", "clean house"]);
        state.selection.select_last(2);

        let id = state.store.tasks()[1].id;
        state.expanded = Some(id);
        state.store.delete_task(id);
        state.sync_after_mutation();

        assert_eq!(state.selection.selected_index, 0);
        assert_eq!(state.expanded, None);
    }
}

//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.
//! Every key maps to at most one TaskStore operation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::TaskStore;

use super::state::{AppState, InteractionMode};

/// TUI application
#[derive(Debug, Default)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance around a loaded store
    pub fn new(store: TaskStore, show_finished: bool) -> Self {
        Self {
            state: AppState::new(store, show_finished),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match &self.state.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::Input => self.handle_input_key(key),
            InteractionMode::Search => self.handle_search_key(key),
            InteractionMode::Help => self.handle_help_key(key),
        }
    }

    /// Handle key in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            // === Quit ===
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return true; // Force quit
            }
            (KeyCode::Char('q'), _) => {
                self.state.should_quit = true;
            }

            // === Help ===
            (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => {
                self.state.interaction_mode = InteractionMode::Help;
            }

            // === Mode switching ===
            (KeyCode::Char('/'), _) => {
                self.state.interaction_mode = InteractionMode::Search;
            }
            (KeyCode::Char('a'), _) | (KeyCode::Char('n'), _) => {
                self.state.interaction_mode = InteractionMode::Input;
            }

            // === Navigation ===
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
                self.state.selection.select_prev();
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                let max = self.state.visible_count();
                self.state.selection.select_next(max);
            }
            (KeyCode::Char('g'), _) => {
                self.state.selection.select_first();
            }
            (KeyCode::Char('G'), _) => {
                let max = self.state.visible_count();
                self.state.selection.select_last(max);
            }

            // === Task actions ===
            (KeyCode::Char('e'), _) => {
                // Pull the selected task into the input bar for editing
                if let Some(id) = self.state.selected_task_id() {
                    self.state.store.begin_edit(id);
                    self.state.sync_after_mutation();
                    self.state.interaction_mode = InteractionMode::Input;
                }
            }
            (KeyCode::Char('d'), _) | (KeyCode::Char('x'), _) => {
                if let Some(id) = self.state.selected_task_id() {
                    self.state.store.delete_task(id);
                    self.state.sync_after_mutation();
                }
            }
            (KeyCode::Char(' '), _) => {
                if let Some(id) = self.state.selected_task_id() {
                    self.state.store.toggle_completed(id);
                    self.state.sync_after_mutation();
                }
            }
            (KeyCode::Enter, _) => {
                if let Some(id) = self.state.selected_task_id() {
                    self.state.toggle_expand(id);
                }
            }

            // === Show Finished filter ===
            (KeyCode::Char('f'), _) => {
                self.state.show_finished = !self.state.show_finished;
                self.state.sync_after_mutation();
            }

            // === Clear search ===
            (KeyCode::Esc, _) => {
                if !self.state.search_text.is_empty() {
                    self.state.search_text.clear();
                    self.state.sync_after_mutation();
                }
            }

            _ => {}
        }

        false
    }

    /// Handle key while editing the pending input
    fn handle_input_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                // Leave the buffer intact so an edit in progress is not lost
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Enter => {
                // Commit through the store; on validation failure stay in
                // input mode and let the feedback line explain
                if self.state.store.add_task().is_ok() {
                    self.state.interaction_mode = InteractionMode::Normal;
                    self.state.sync_after_mutation();
                }
            }
            KeyCode::Backspace => {
                let mut input = self.state.store.pending_input().to_owned();
                input.pop();
                self.state.store.set_pending_input(input);
            }
            KeyCode::Char(c) => {
                let mut input = self.state.store.pending_input().to_owned();
                input.push(c);
                self.state.store.set_pending_input(input);
            }
            _ => {}
        }

        false
    }

    /// Handle key in live search mode
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.state.search_text.clear();
                self.state.interaction_mode = InteractionMode::Normal;
                self.state.sync_after_mutation();
            }
            KeyCode::Enter => {
                // Keep the filter applied
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Backspace => {
                self.state.search_text.pop();
                self.state.sync_after_mutation();
            }
            KeyCode::Char(c) => {
                self.state.search_text.push(c);
                self.state.sync_after_mutation();
            }
            _ => {}
        }

        false
    }

    /// Handle key in help mode
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            _ => {}
        }

        false
    }
}

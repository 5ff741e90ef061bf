//! TaskMate - terminal to-do list manager
//!
//! Tasks are loaded once from a static JSON file at startup and held in
//! memory for the lifetime of the session; nothing is written back. The
//! TaskStore owns the list and the pending-input text and exposes the
//! only operations that mutate state; the TUI translates key presses
//! into store operations and re-renders from the result.
//!
//! # Modules
//!
//! - [`domain`] - Task and TaskId types
//! - [`store`] - In-memory task store and initial-load logic
//! - [`tui`] - ratatui terminal view
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod store;
pub mod tui;

// Re-export commonly used types
pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, TasksConfig, UiConfig};
pub use domain::{Task, TaskId};
pub use store::{MIN_TITLE_CHARS, TaskStore, ValidationError, load_tasks};

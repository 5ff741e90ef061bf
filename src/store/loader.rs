//! One-shot loading of the initial task list
//!
//! Reads a JSON array of task records from a fixed path at startup.
//! Consumed once, read-only; nothing is ever written back.

use std::fs;
use std::path::Path;

use eyre::{Context, Result};

use crate::domain::Task;

/// Read a task list from a JSON file
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content =
        fs::read_to_string(path).context(format!("Failed to read tasks file {}", path.display()))?;

    let tasks: Vec<Task> =
        serde_json::from_str(&content).context(format!("Failed to parse tasks file {}", path.display()))?;

    Ok(tasks)
}

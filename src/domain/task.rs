//! The Task record
//!
//! Field names on the wire match the static resource shape consumed at
//! startup: `id`, `todo`, `description`, `date`, `isCompleted`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::TaskId;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation, immutable
    pub id: TaskId,

    /// Human-readable title
    #[serde(rename = "todo")]
    pub title: String,

    /// Free-text detail shown in the expanded view
    #[serde(default)]
    pub description: String,

    /// Creation timestamp; not touched by later edits
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,

    /// Completion flag
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
}

impl Task {
    /// Create a new Task with a fresh id, empty description, and the
    /// current timestamp
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            created_at: Utc::now(),
            is_completed: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Case-insensitive substring match against the title.
    /// An empty query matches every task.
    pub fn matches_search(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert!(task.description.is_empty());
        assert!(!task.is_completed);
    }

    #[test]
    fn test_task_toggle() {
        let mut task = Task::new("Buy milk");
        task.toggle();
        assert!(task.is_completed);
        task.toggle();
        assert!(!task.is_completed);
    }

    #[test]
    fn test_matches_search_case_insensitive() {
        let task = Task::new("Buy milk");
        assert!(task.matches_search("MIL"));
        assert!(task.matches_search("buy"));
        assert!(!task.matches_search("house"));
    }

    #[test]
    fn test_matches_search_empty_query() {
        let task = Task::new("Buy milk");
        assert!(task.matches_search(""));
    }

    #[test]
    fn test_serde_wire_shape() {
        let task = Task::new("Write tests").with_description("unit and integration");
        let json = serde_json::to_value(&task).unwrap();

        assert!(json.get("todo").is_some());
        assert!(json.get("date").is_some());
        assert!(json.get("isCompleted").is_some());
        assert!(json.get("title").is_none());

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.title, "Write tests");
        assert_eq!(back.description, "unit and integration");
    }

    #[test]
    fn test_deserialize_minimal_record() {
        // description and isCompleted are optional in the source file
        let json = r#"{
            "id": "7f2c43a0-5b1a-4b6e-9a6a-2f8f6f8a9b10",
            "todo": "clean house",
            "date": "2024-05-01T12:00:00.000Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.title, "clean house");
        assert!(task.description.is_empty());
        assert!(!task.is_completed);
    }
}

//! Domain types for TaskMate
//!
//! Core types: Task and TaskId. The serde shape matches the static
//! JSON resource loaded once at startup.

mod id;
mod task;

pub use id::TaskId;
pub use task::Task;

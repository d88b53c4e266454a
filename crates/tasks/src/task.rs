//! Core task types

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single to-do item
///
/// Tasks carry no identifier. They are addressed by their 1-based position
/// in the stored list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing
    pub text: String,
    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Status marker shown in listings
    pub fn marker(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// A task paired with its 1-based number, as shown by `list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub number: usize,
    pub task: Task,
}

impl fmt::Display for TaskEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.number, self.task.marker(), self.task.text)
    }
}

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Opaque task identifier, assigned once at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub favorite: bool,
    /// Inline edit in progress (UI only)
    #[serde(skip)]
    pub editing: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Create a task with default flags
    pub fn new(id: TaskId, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
            favorite: false,
            editing: false,
            created_at: Local::now(),
        }
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.text == other.text
            && self.completed == other.completed
            && self.favorite == other.favorite
            && self.editing == other.editing
    }
}

impl Eq for Task {}

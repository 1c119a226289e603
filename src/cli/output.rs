use serde::Serialize;

use crate::model::notification::Notification;
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub favorite: bool,
    pub editing: bool,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct ReplayJson {
    pub tasks: Vec<TaskJson>,
    pub notifications: Vec<Notification>,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.0,
        text: task.text.clone(),
        completed: task.completed,
        favorite: task.favorite,
        editing: task.editing,
        created_at: task.created_at.to_rfc3339(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// `[ ] 3 Call mom`, `[x] 2 Walk dog *` (trailing star when favorite)
pub fn format_task_line(task: &Task) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    let star = if task.favorite { " *" } else { "" };
    format!("[{}] {} {}{}", check, task.id, task.text, star)
}

/// `warning: Cannot add an empty task`
pub fn format_notification(notification: &Notification) -> String {
    format!(
        "{}: {}",
        notification.level.label(),
        notification.message
    )
}

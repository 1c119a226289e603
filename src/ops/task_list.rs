use crate::model::task::{Task, TaskId};

/// Error type for task list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task text is empty")]
    EmptyText,
}

/// The ordered task collection. New tasks go to the front.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a new task with `text` as given. Blank text is rejected.
    pub fn add(&mut self, text: &str) -> Result<TaskId, TaskError> {
        if text.trim().is_empty() {
            return Err(TaskError::EmptyText);
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(0, Task::new(id, text.to_string()));
        Ok(id)
    }

    /// Remove and return the task, if present
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Flip `completed`, returning the new value
    pub fn toggle_completed(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Flip `favorite`, returning the new value
    pub fn toggle_favorite(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.favorite = !task.favorite;
        Some(task.favorite)
    }

    /// Flip `editing`, returning the new value
    pub fn toggle_editing(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.editing = !task.editing;
        Some(task.editing)
    }

    pub fn set_editing(&mut self, id: TaskId, editing: bool) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.editing = editing;
                true
            }
            None => false,
        }
    }

    /// Replace the text verbatim (no trimming, empty allowed)
    pub fn set_text(&mut self, id: TaskId, text: String) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.text = text;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Display order: incomplete tasks, then completed, each in stored order
    pub fn ordered(&self) -> Vec<&Task> {
        let (mut open, done): (Vec<&Task>, Vec<&Task>) =
            self.tasks.iter().partition(|t| !t.completed);
        open.extend(done);
        open
    }

    /// Tasks in stored (newest-first) order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

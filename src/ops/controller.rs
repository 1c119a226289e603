//! The task list controller: the task collection, the draft input, and
//! the notifications produced by each operation.
//!
//! Every operation is total. Unknown IDs are silent no-ops; the only
//! rejected input is an empty draft on [`Controller::add`], which is
//! reported through notifications and leaves the draft untouched.

use tracing::{debug, warn};

use crate::model::notification::Notification;
use crate::model::task::{Task, TaskId};

use super::action::Action;
use super::task_list::{TaskError, TaskList};

#[derive(Debug, Default)]
pub struct Controller {
    tasks: TaskList,
    draft: String,
    outbox: Vec<Notification>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Mutable access for in-place editing of the draft
    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// Apply a single action
    pub fn apply(&mut self, action: Action) {
        debug!(action = action.name(), task = ?action.target(), "apply");
        match action {
            Action::SetDraft(text) => self.set_draft(text),
            Action::Add => {
                self.add();
            }
            Action::Delete(id) => {
                self.delete(id);
            }
            Action::ToggleFavorite(id) => {
                self.toggle_favorite(id);
            }
            Action::ToggleCompleted(id) => {
                self.toggle_completed(id);
            }
            Action::BeginEdit(id) => {
                self.begin_edit(id);
            }
            Action::ToggleEditing(id) => {
                self.toggle_editing(id);
            }
            Action::CancelEdit(id) => {
                self.cancel_edit(id);
            }
            Action::CommitEdit(id, text) => {
                self.commit_edit(id, text);
            }
        }
    }

    /// Submit the draft. On success the draft is cleared and the new ID returned.
    pub fn add(&mut self) -> Option<TaskId> {
        match self.tasks.add(&self.draft) {
            Ok(id) => {
                self.draft.clear();
                self.notify(Notification::success("Added successfully"));
                Some(id)
            }
            Err(TaskError::EmptyText) => {
                warn!("rejected empty task");
                self.notify(Notification::error("Could not add task"));
                self.notify(Notification::warning("Cannot add an empty task"));
                None
            }
        }
    }

    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.tasks.remove(id)?;
        self.notify(Notification::info("Deleted successfully"));
        Some(removed)
    }

    pub fn toggle_favorite(&mut self, id: TaskId) -> Option<bool> {
        let favorite = self.tasks.toggle_favorite(id)?;
        self.notify(Notification::info(if favorite {
            "Added to favorites"
        } else {
            "Removed from favorites"
        }));
        Some(favorite)
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> Option<bool> {
        self.tasks.toggle_completed(id)
    }

    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        self.tasks.set_editing(id, true)
    }

    pub fn toggle_editing(&mut self, id: TaskId) -> Option<bool> {
        self.tasks.toggle_editing(id)
    }

    /// Leave edit mode; the text is left as it was
    pub fn cancel_edit(&mut self, id: TaskId) -> bool {
        self.tasks.set_editing(id, false)
    }

    /// Replace the task text and leave edit mode. Empty text is accepted.
    pub fn commit_edit(&mut self, id: TaskId, text: String) -> bool {
        if !self.tasks.set_text(id, text) {
            return false;
        }
        self.tasks.set_editing(id, false);
        self.notify(Notification::info("Updated successfully"));
        true
    }

    /// Tasks in display order
    pub fn render(&self) -> Vec<&Task> {
        self.tasks.ordered()
    }

    /// Drain notifications produced since the last call
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    fn notify(&mut self, notification: Notification) {
        self.outbox.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notification::Level;
    use pretty_assertions::assert_eq;

    fn levels(c: &mut Controller) -> Vec<Level> {
        c.take_notifications().iter().map(|n| n.level).collect()
    }

    fn add(c: &mut Controller, text: &str) -> TaskId {
        c.set_draft(text);
        let id = c.add().unwrap();
        c.take_notifications();
        id
    }

    #[test]
    fn test_add_clears_draft_and_reports_success() {
        let mut c = Controller::new();
        c.set_draft("Buy milk");
        let id = c.add().unwrap();
        assert_eq!(c.draft(), "");
        assert_eq!(c.tasks().len(), 1);
        assert_eq!(c.render()[0].id, id);
        assert_eq!(levels(&mut c), vec![Level::Success]);
    }

    #[test]
    fn test_add_stores_draft_untrimmed() {
        let mut c = Controller::new();
        c.set_draft("  Buy milk ");
        c.add().unwrap();
        assert_eq!(c.render()[0].text, "  Buy milk ");
    }

    #[test]
    fn test_add_empty_keeps_draft_and_reports() {
        let mut c = Controller::new();
        c.set_draft("   ");
        assert_eq!(c.add(), None);
        assert_eq!(c.draft(), "   ");
        assert!(c.tasks().is_empty());
        assert_eq!(levels(&mut c), vec![Level::Error, Level::Warning]);
    }

    #[test]
    fn test_new_task_is_first_among_incomplete() {
        let mut c = Controller::new();
        let a = add(&mut c, "a");
        c.toggle_completed(a);
        let b = add(&mut c, "b");
        let c_id = add(&mut c, "c");
        let order: Vec<TaskId> = c.render().iter().map(|t| t.id).collect();
        assert_eq!(order, vec![c_id, b, a]);
    }

    #[test]
    fn test_delete_reports_only_on_removal() {
        let mut c = Controller::new();
        let id = add(&mut c, "a");
        assert!(c.delete(TaskId(99)).is_none());
        assert!(levels(&mut c).is_empty());
        assert_eq!(c.delete(id).unwrap().text, "a");
        assert!(c.tasks().is_empty());
        assert_eq!(levels(&mut c), vec![Level::Info]);
    }

    #[test]
    fn test_toggle_completed_is_silent() {
        let mut c = Controller::new();
        let id = add(&mut c, "a");
        assert_eq!(c.toggle_completed(id), Some(true));
        assert!(c.take_notifications().is_empty());
    }

    #[test]
    fn test_toggle_favorite_messages() {
        let mut c = Controller::new();
        let id = add(&mut c, "a");
        c.toggle_favorite(id);
        c.toggle_favorite(id);
        let messages: Vec<String> = c
            .take_notifications()
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages, vec!["Added to favorites", "Removed from favorites"]);
    }

    #[test]
    fn test_commit_edit_replaces_text_even_when_empty() {
        let mut c = Controller::new();
        let keep = add(&mut c, "keep");
        let id = add(&mut c, "old");
        assert!(c.begin_edit(id));
        assert!(c.tasks().get(id).unwrap().editing);

        assert!(c.commit_edit(id, String::new()));
        let task = c.tasks().get(id).unwrap();
        assert_eq!(task.text, "");
        assert!(!task.editing);
        assert_eq!(c.tasks().get(keep).unwrap().text, "keep");
        assert_eq!(levels(&mut c), vec![Level::Info]);
    }

    #[test]
    fn test_cancel_edit_keeps_text() {
        let mut c = Controller::new();
        let id = add(&mut c, "old");
        c.begin_edit(id);
        assert!(c.cancel_edit(id));
        let task = c.tasks().get(id).unwrap();
        assert_eq!(task.text, "old");
        assert!(!task.editing);
        assert!(c.take_notifications().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut c = Controller::new();
        add(&mut c, "a");
        let missing = TaskId(42);
        c.apply(Action::Delete(missing));
        c.apply(Action::ToggleFavorite(missing));
        c.apply(Action::ToggleCompleted(missing));
        c.apply(Action::BeginEdit(missing));
        c.apply(Action::CommitEdit(missing, "x".into()));
        assert_eq!(c.tasks().len(), 1);
        assert!(c.take_notifications().is_empty());
    }

    #[test]
    fn test_buy_milk_walkthrough() {
        let mut c = Controller::new();
        c.apply(Action::SetDraft("Buy milk".into()));
        c.apply(Action::Add);
        let id = c.render()[0].id;
        c.apply(Action::ToggleCompleted(id));

        let view = c.render();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].text, "Buy milk");
        assert!(view[0].completed);
        assert!(!view[0].favorite);
    }
}

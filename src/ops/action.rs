use crate::model::task::TaskId;

/// One user event, applied to the controller as a single mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the draft input text
    SetDraft(String),
    /// Submit the draft as a new task
    Add,
    Delete(TaskId),
    ToggleFavorite(TaskId),
    ToggleCompleted(TaskId),
    BeginEdit(TaskId),
    /// The edit button: enters edit mode, or leaves it without saving
    ToggleEditing(TaskId),
    CancelEdit(TaskId),
    CommitEdit(TaskId, String),
}

impl Action {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetDraft(_) => "set_draft",
            Action::Add => "add",
            Action::Delete(_) => "delete",
            Action::ToggleFavorite(_) => "toggle_favorite",
            Action::ToggleCompleted(_) => "toggle_completed",
            Action::BeginEdit(_) => "begin_edit",
            Action::ToggleEditing(_) => "toggle_editing",
            Action::CancelEdit(_) => "cancel_edit",
            Action::CommitEdit(_, _) => "commit_edit",
        }
    }

    /// The task this action targets, if any
    pub fn target(&self) -> Option<TaskId> {
        match self {
            Action::SetDraft(_) | Action::Add => None,
            Action::Delete(id)
            | Action::ToggleFavorite(id)
            | Action::ToggleCompleted(id)
            | Action::BeginEdit(id)
            | Action::ToggleEditing(id)
            | Action::CancelEdit(id)
            | Action::CommitEdit(id, _) => Some(*id),
        }
    }
}

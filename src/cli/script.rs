//! Line-oriented action scripts for `todo replay`.
//!
//! ```text
//! # comment
//! add Buy milk
//! complete 1
//! commit 1 Buy oat milk
//! ```

use crate::model::task::TaskId;
use crate::ops::action::Action;

/// Error type for script parsing. Line numbers are 1-based.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' needs a task id")]
    MissingId { line: usize, command: String },
    #[error("line {line}: invalid task id '{value}'")]
    InvalidId { line: usize, value: String },
}

/// Parse a script into actions, in order
pub fn parse_script(text: &str) -> Result<Vec<Action>, ScriptError> {
    let mut actions = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (command, rest) = split_word(trimmed);
        match command {
            "draft" => actions.push(Action::SetDraft(rest.to_string())),
            "add" => {
                if !rest.is_empty() {
                    actions.push(Action::SetDraft(rest.to_string()));
                }
                actions.push(Action::Add);
            }
            "delete" => actions.push(Action::Delete(parse_id(command, rest, line)?)),
            "favorite" => actions.push(Action::ToggleFavorite(parse_id(command, rest, line)?)),
            "complete" => actions.push(Action::ToggleCompleted(parse_id(command, rest, line)?)),
            "edit" => actions.push(Action::BeginEdit(parse_id(command, rest, line)?)),
            "cancel" => actions.push(Action::CancelEdit(parse_id(command, rest, line)?)),
            "toggle-edit" => actions.push(Action::ToggleEditing(parse_id(command, rest, line)?)),
            "commit" => {
                let (id_str, text) = split_word(rest);
                let id = parse_id(command, id_str, line)?;
                actions.push(Action::CommitEdit(id, text.to_string()));
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: other.to_string(),
                });
            }
        }
    }
    Ok(actions)
}

/// First whitespace-delimited word and the remainder with leading whitespace removed
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_id(command: &str, value: &str, line: usize) -> Result<TaskId, ScriptError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ScriptError::MissingId {
            line,
            command: command.to_string(),
        });
    }
    value
        .parse::<u64>()
        .map(TaskId)
        .map_err(|_| ScriptError::InvalidId {
            line,
            value: value.to_string(),
        })
}

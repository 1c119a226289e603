use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::common::edit_line;

/// Keys during an inline edit. Enter or Tab (leaving the field) saves.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Tab => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        _ => {
            if let Some(edit) = &mut app.edit {
                edit_line(&mut edit.buffer, &mut edit.cursor, key);
            }
        }
    }
}

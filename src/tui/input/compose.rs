use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common::edit_line;

/// Keys while the new-task input has focus
pub(super) fn handle_compose(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Esc | KeyCode::Tab => app.mode = Mode::Navigate,
        _ => {
            edit_line(app.controller.draft_mut(), &mut app.draft_cursor, key);
        }
    }
}

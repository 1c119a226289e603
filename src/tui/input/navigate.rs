use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::action::Action;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    let len = app.visible_tasks().len();
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.toasts.clear(),

        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = len.saturating_sub(1),

        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
            app.draft_cursor = app.controller.draft().len();
            app.mode = Mode::Compose;
        }
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit(),

        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                app.apply(Action::ToggleCompleted(id));
            }
        }
        KeyCode::Char('f') | KeyCode::Char('s') => {
            if let Some(id) = app.cursor_task_id() {
                app.apply(Action::ToggleFavorite(id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_task_id() {
                app.apply(Action::Delete(id));
            }
        }
        _ => {}
    }
}

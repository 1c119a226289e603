use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::action::Action;
use crate::ops::controller::Controller;

use super::input;
use super::render;
use super::theme::Theme;
use super::toast::ToastQueue;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the list
    Navigate,
    /// Typing into the new-task input
    Compose,
    /// Inline edit of one task
    Edit,
}

/// Buffer for an inline edit; written back to the task only on commit
#[derive(Debug, Clone)]
pub struct EditState {
    pub task_id: TaskId,
    pub buffer: String,
    /// Byte offset into `buffer`
    pub cursor: usize,
}

/// Main application state
pub struct App {
    pub controller: Controller,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the display-ordered task list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Byte offset into the draft
    pub draft_cursor: usize,
    pub edit: Option<EditState>,
    pub toasts: ToastQueue,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            controller: Controller::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            draft_cursor: 0,
            edit: None,
            toasts: ToastQueue::new(
                Duration::from_secs(config.ui.toast_secs),
                config.ui.max_toasts,
            ),
            show_help: false,
        }
    }

    /// Tasks in display order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.controller.render()
    }

    /// ID of the task under the cursor
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.cursor).map(|t| t.id)
    }

    /// Apply an action, keeping the cursor on the same task if it still exists
    pub fn apply(&mut self, action: Action) {
        let followed = self.cursor_task_id();
        self.controller.apply(action);
        self.flush_notifications(Instant::now());

        let ordered = self.visible_tasks();
        let position = followed.and_then(|id| ordered.iter().position(|t| t.id == id));
        let len = ordered.len();
        match position {
            Some(pos) => self.cursor = pos,
            None => self.cursor = self.cursor.min(len.saturating_sub(1)),
        }
    }

    /// Move controller notifications into the toast stack
    pub fn flush_notifications(&mut self, now: Instant) {
        for notification in self.controller.take_notifications() {
            debug!(level = notification.level.label(), text = %notification.message, "toast");
            self.toasts.push(notification, now);
        }
    }

    /// Start an inline edit of the task under the cursor
    pub fn begin_edit(&mut self) {
        let Some(id) = self.cursor_task_id() else {
            return;
        };
        let text = self
            .controller
            .tasks()
            .get(id)
            .map(|t| t.text.clone())
            .unwrap_or_default();
        self.apply(Action::BeginEdit(id));
        self.edit = Some(EditState {
            task_id: id,
            cursor: text.len(),
            buffer: text,
        });
        self.mode = Mode::Edit;
    }

    /// Write the edit buffer back to the task
    pub fn commit_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            self.apply(Action::CommitEdit(edit.task_id, edit.buffer));
        }
        self.mode = Mode::Navigate;
    }

    /// Leave the inline edit without saving
    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            self.apply(Action::CancelEdit(edit.task_id));
        }
        self.mode = Mode::Navigate;
    }

    /// Submit the draft; the draft cursor resets only when the draft was consumed
    pub fn submit_draft(&mut self) {
        self.apply(Action::Add);
        self.draft_cursor = self.draft_cursor.min(self.controller.draft().len());
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    info!("starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(tasks = app.controller.tasks().len(), "exiting tui");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.toasts.prune(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app_with(items: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        for item in items {
            app.controller.set_draft(*item);
            app.apply(Action::Add);
        }
        app.toasts.clear();
        app
    }

    fn visible_texts(app: &App) -> Vec<String> {
        app.visible_tasks().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn cursor_follows_completed_task() {
        let mut app = app_with(&["a", "b", "c"]);
        // display: c b a
        app.cursor = 0;
        let id = app.cursor_task_id().unwrap();
        app.apply(Action::ToggleCompleted(id));
        assert_eq!(visible_texts(&app), vec!["b", "a", "c"]);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.cursor_task_id(), Some(id));
    }

    #[test]
    fn cursor_clamped_after_delete_of_last_row() {
        let mut app = app_with(&["a", "b"]);
        app.cursor = 1;
        let id = app.cursor_task_id().unwrap();
        app.apply(Action::Delete(id));
        assert_eq!(app.cursor, 0);
        app.apply(Action::Delete(app.cursor_task_id().unwrap()));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.cursor_task_id(), None);
    }

    #[test]
    fn notifications_become_toasts() {
        let mut app = app_with(&[]);
        app.controller.set_draft("  ");
        app.submit_draft();
        let levels: Vec<_> = app.toasts.iter().map(|t| t.notification.level).collect();
        assert_eq!(
            levels,
            vec![crate::model::Level::Error, crate::model::Level::Warning]
        );
        assert_eq!(app.controller.draft(), "  ");
    }

    #[test]
    fn huge_toast_lifetime_from_config() {
        let config: Config =
            toml::from_str("[ui]\ntoast_secs = 9223372036854775807\n").unwrap();
        let mut app = App::new(&config);
        app.controller.set_draft("x");
        app.submit_draft();
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(visible_texts(&app), vec!["x"]);
    }

    #[test]
    fn submit_resets_draft_cursor() {
        let mut app = app_with(&[]);
        app.controller.set_draft("milk");
        app.draft_cursor = 4;
        app.submit_draft();
        assert_eq!(app.draft_cursor, 0);
        assert_eq!(visible_texts(&app), vec!["milk"]);
    }

    #[test]
    fn edit_commit_and_cancel() {
        let mut app = app_with(&["old"]);
        app.begin_edit();
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.visible_tasks()[0].editing);
        app.edit.as_mut().unwrap().buffer.push_str(" and new");
        app.commit_edit();
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(visible_texts(&app), vec!["old and new"]);
        assert!(!app.visible_tasks()[0].editing);

        app.begin_edit();
        app.edit.as_mut().unwrap().buffer.clear();
        app.cancel_edit();
        assert_eq!(visible_texts(&app), vec!["old and new"]);
        assert!(app.edit.is_none());
    }

    #[test]
    fn begin_edit_on_empty_list_does_nothing() {
        let mut app = app_with(&[]);
        app.begin_edit();
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit.is_none());
    }
}

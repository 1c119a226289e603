pub mod help_overlay;
mod helpers;
pub mod input_bar;
pub mod status_row;
pub mod task_list_view;
pub mod toasts;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title (1 row) | input box (3 rows) | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    input_bar::render_input_bar(frame, app, chunks[1]);
    task_list_view::render_task_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    // Toasts go over everything
    if !app.toasts.is_empty() {
        toasts::render_toasts(frame, app, area);
    }
}

/// Title on the left, open/done counts on the right
fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let tasks = app.controller.tasks();
    let done = tasks.iter().filter(|t| t.completed).count();
    let open = tasks.len() - done;

    let mut spans = vec![Span::styled(
        " Todo List",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let counts = format!("{} open  {} done ", open, done);
    let used = helpers::spans_width(&spans) + counts.chars().count();
    let width = area.width as usize;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.push(Span::styled(counts, Style::default().fg(app.theme.dim).bg(bg)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

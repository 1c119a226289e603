use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{
    CARET, DONE_MARKER, OPEN_MARKER, STAR_EMPTY, STAR_FULL, pad_to, scroll_start, spans_width,
};

/// Cells taken by everything on a row except the text
const ROW_CHROME: usize = 6;

/// Render the task list: open tasks first, completed below
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let len = app.visible_tasks().len();
    if len == 0 {
        let empty = Paragraph::new(" You have no tasks")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    app.cursor = app.cursor.min(len - 1);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let app = &*app;
    let width = area.width as usize;
    let lines: Vec<Line> = app
        .visible_tasks()
        .into_iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(i, task)| task_line(app, task, i == app.cursor, width))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn task_line(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let mut spans: Vec<Span<'static>> = Vec::new();
    if is_cursor {
        spans.push(Span::styled(CARET, base.fg(theme.highlight)));
    } else {
        spans.push(Span::styled(" ", base));
    }

    let marker = if task.completed {
        Span::styled(DONE_MARKER, base.fg(theme.green))
    } else {
        Span::styled(OPEN_MARKER, base.fg(theme.dim))
    };
    spans.push(marker);
    spans.push(Span::styled(" ", base));

    let text_width = width.saturating_sub(ROW_CHROME);

    // Inline edit: show the buffer with a caret, no star
    if let Some(edit) = app.edit.as_ref().filter(|e| e.task_id == task.id) {
        let start = scroll_start(&edit.buffer, edit.cursor, text_width);
        let style = base.fg(theme.text_bright);
        spans.push(Span::styled(edit.buffer[start..edit.cursor].to_string(), style));
        spans.push(Span::styled(CARET, base.fg(theme.highlight)));
        let tail_room = text_width.saturating_sub(spans_width(&spans[3..]));
        let tail = unicode::truncate_to_width(&edit.buffer[edit.cursor..], tail_room);
        spans.push(Span::styled(tail, style));
        pad_to(&mut spans, width, base);
        return Line::from(spans);
    }

    let text_style = if task.completed {
        base.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        base.fg(theme.text_bright).add_modifier(Modifier::BOLD)
    } else {
        base.fg(theme.text_bright)
    };
    spans.push(Span::styled(
        unicode::truncate_to_width(&task.text, text_width),
        text_style,
    ));
    pad_to(&mut spans, 3 + text_width + 1, base);

    let star = if task.favorite {
        Span::styled(STAR_FULL, base.fg(theme.yellow))
    } else {
        Span::styled(STAR_EMPTY, base.fg(theme.dim))
    };
    spans.push(star);
    pad_to(&mut spans, width, base);
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::action::Action;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn empty_list_message() {
        let mut app = app_with_tasks(&[]);
        let output = render_to_string(30, 4, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " You have no tasks");
    }

    #[test]
    fn completed_rows_sink_with_markers() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog", "Call mom"]);
        let walk = app.visible_tasks()[1].id;
        app.apply(Action::ToggleCompleted(walk));
        let milk = app.visible_tasks()[1].id;
        app.apply(Action::ToggleFavorite(milk));
        app.cursor = 0;

        let output = render_to_string(30, 4, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_snapshot!(output, @r"
        ▌○ Call mom                 ☆
         ○ Buy milk                 ★
         ● Walk dog                 ☆
        ");
    }

    #[test]
    fn long_text_is_truncated() {
        let mut app = app_with_tasks(&["a very long task description here"]);
        let output = render_to_string(20, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, "▌○ a very long t\u{2026} ☆");
    }

    #[test]
    fn editing_row_shows_buffer_with_caret() {
        let mut app = app_with_tasks(&["milk"]);
        app.begin_edit();
        if let Some(edit) = app.edit.as_mut() {
            edit.buffer = "oat milk".into();
            edit.cursor = 3;
        }
        let output = render_to_string(30, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, "▌○ oat▌ milk");
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut app = app_with_tasks(&["one", "two", "three", "four"]);
        // display: four three two one
        app.cursor = 3;
        let output = render_to_string(30, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(app.scroll_offset, 2);
        assert!(output.contains("two"));
        assert!(output.contains("one"));
        assert!(!output.contains("four"));
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::{CARET, scroll_start};

const PLACEHOLDER: &str = "Add new task";

/// Render the draft input box
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Compose;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(" New task ")
        .style(Style::default().bg(bg));

    let inner_width = area.width.saturating_sub(2) as usize;
    let draft = app.controller.draft();
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let line = if focused {
        let cursor = app.draft_cursor.min(draft.len());
        let start = scroll_start(draft, cursor, inner_width);
        let before = draft[start..cursor].to_string();
        let room = inner_width.saturating_sub(unicode::display_width(&before) + 1);
        let after = unicode::truncate_to_width(&draft[cursor..], room);
        Line::from(vec![
            Span::styled(before, text_style),
            Span::styled(CARET, Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(after, text_style),
        ])
    } else if draft.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            unicode::truncate_to_width(draft, inner_width),
            text_style,
        ))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

const NAVIGATE_HINTS: &[(&str, &str)] = &[
    ("a", "add"),
    ("space", "done"),
    ("f", "star"),
    ("e", "edit"),
    ("d", "delete"),
    ("?", "help"),
    ("q", "quit"),
];
const COMPOSE_HINTS: &[(&str, &str)] = &[("Enter", "add"), ("Esc", "back")];
const EDIT_HINTS: &[(&str, &str)] = &[("Enter", "save"), ("Esc", "cancel")];

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();

    if app.show_key_hints {
        let hints = match app.mode {
            Mode::Navigate => NAVIGATE_HINTS,
            Mode::Compose => COMPOSE_HINTS,
            Mode::Edit => EDIT_HINTS,
        };
        for (key, desc) in hints {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
            spans.push(Span::styled(
                format!(" {} ", desc),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

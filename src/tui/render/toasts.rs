use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::model::Level;
use crate::tui::app::App;
use crate::util::unicode;

fn level_symbol(level: Level) -> &'static str {
    match level {
        Level::Success => "\u{2713}", // ✓
        Level::Error => "\u{2717}",   // ✗
        Level::Info => "i",
        Level::Warning => "!",
    }
}

/// Render the toast stack in the top-right corner, newest at the bottom
pub fn render_toasts(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.selection_bg;
    let max_width = area.width.saturating_sub(2) as usize;

    for (row, toast) in app.toasts.iter().enumerate() {
        let y = area.y + 1 + row as u16;
        if y >= area.bottom() {
            break;
        }
        let level = toast.notification.level;
        let color = app.theme.level_color(level);
        let message = unicode::truncate_to_width(
            &toast.notification.message,
            max_width.saturating_sub(4),
        );
        let width = (unicode::display_width(&message) + 4).min(max_width) as u16;
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y,
            width,
            height: 1,
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", level_symbol(level)),
                Style::default()
                    .fg(color)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, Style::default().fg(app.theme.text_bright).bg(bg)),
            Span::styled(" ", Style::default().bg(bg)),
        ]);

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

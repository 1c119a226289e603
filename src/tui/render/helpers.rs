use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;

use crate::util::unicode;

pub(super) const OPEN_MARKER: &str = "\u{25CB}"; // ○
pub(super) const DONE_MARKER: &str = "\u{25CF}"; // ●
pub(super) const STAR_EMPTY: &str = "\u{2606}"; // ☆
pub(super) const STAR_FULL: &str = "\u{2605}"; // ★
pub(super) const CARET: &str = "\u{258C}"; // ▌

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad `spans` with `style` until they fill `width` cells
pub(super) fn pad_to(spans: &mut Vec<Span<'static>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Byte offset to start showing `text` from so the cell after `cursor`
/// still fits in `width` cells
pub(super) fn scroll_start(text: &str, cursor: usize, width: usize) -> usize {
    let mut start = 0;
    while unicode::display_width(&text[start..cursor]) + 1 > width {
        match unicode::next_grapheme_boundary(text, start) {
            Some(next) if next <= cursor => start = next,
            _ => break,
        }
    }
    start
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::util::unicode::{self, display_width, next_grapheme_boundary};

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad `spans` with styled spaces so the line fills `width` cells
pub(super) fn pad_to_width(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// A fixed-size rectangle centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
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

/// One row of an editable field, `width` cells wide. With `cursor` set, the
/// grapheme under it is drawn in `cursor_style` and the text scrolls left
/// so the cursor stays visible.
pub(super) fn input_line(
    text: &str,
    cursor: Option<usize>,
    width: usize,
    style: Style,
    cursor_style: Style,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    match cursor {
        None => {
            spans.push(Span::styled(unicode::truncate_to_width(text, width), style));
        }
        Some(pos) => {
            let pos = pos.min(text.len());
            // Drop graphemes off the left until cursor + one cell fit
            let mut start = 0;
            while start < pos && display_width(&text[start..pos]) + 1 > width {
                start = next_grapheme_boundary(text, start).unwrap_or(pos);
            }
            spans.push(Span::styled(text[start..pos].to_string(), style));
            match next_grapheme_boundary(text, pos) {
                Some(end) => {
                    let under = &text[pos..end];
                    let under = if under == "\n" { " " } else { under };
                    spans.push(Span::styled(under.to_string(), cursor_style));
                    let room = width.saturating_sub(spans_width(&spans));
                    spans.push(Span::styled(
                        unicode::truncate_to_width(&text[end..], room),
                        style,
                    ));
                }
                None => spans.push(Span::styled(" ", cursor_style)),
            }
        }
    }
    pad_to_width(&mut spans, width, style);
    Line::from(spans)
}

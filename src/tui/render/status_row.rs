use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::modal::ModalKind;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

/// Key hints for the current mode
fn hint(app: &App) -> &'static str {
    match app.mode() {
        Mode::Navigate => "a add  space toggle  e edit  d delete  enter view  ? help  q quit",
        Mode::Modal if app.modal.kind() == Some(ModalKind::Viewing) => "Esc close",
        Mode::Modal => "Tab next field  Ctrl-S save  Esc cancel",
        Mode::Confirm => "y delete  n/Esc cancel",
        Mode::Notice => "Enter/Esc dismiss",
    }
}

/// Render the status row (bottom of screen): the last action's message on
/// the left, key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", truncate_to_width(msg, width.saturating_sub(1))),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    if app.show_key_hints {
        let hint = hint(app);
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint) + 1;
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

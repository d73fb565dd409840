use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::grouping::summarize;
use crate::tui::app::App;
use crate::tui::hit::HitTarget;
use crate::util::unicode::display_width;

pub const ADD_BUTTON: &str = "[ + Add New Task ]";

/// Title, completion summary, and the add button (top of screen)
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let summary_style = Style::default().fg(app.theme.dim).bg(bg);
    let button_style = Style::default()
        .fg(app.theme.button_fg)
        .bg(app.theme.button_bg)
        .add_modifier(Modifier::BOLD);

    let summary = summarize(app.store.tasks());
    let lines = vec![
        Line::from(Span::styled(" Daily Tasks", title_style)),
        Line::from(Span::styled(format!(" {}", summary.text()), summary_style)),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );

    // Button on the title row, right-aligned with one cell of margin
    let button_w = display_width(ADD_BUTTON) as u16;
    if area.width > button_w + 1 {
        let rect = Rect::new(area.x + area.width - button_w - 1, area.y, button_w, 1);
        frame.render_widget(Paragraph::new(Span::styled(ADD_BUTTON, button_style)), rect);
        app.hit_map.push(rect, HitTarget::AddTask);
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::hit::HitTarget;
use crate::util::unicode::{display_width, wrap_to_width};

use super::helpers::centered_rect_fixed;

pub const CONFIRM_DELETE_TEXT: &str = "Are you sure you want to delete this task?";

const DIALOG_W: u16 = 50;

/// Delete confirmation prompt
pub fn render_confirm_popup(frame: &mut Frame, app: &mut App, area: Rect) {
    let task_title = app
        .confirm
        .and_then(|p| app.store.get(p.id))
        .map(|t| format!("\u{201c}{}\u{201d}", t.title));
    let danger = Style::default()
        .fg(app.theme.button_fg)
        .bg(app.theme.red)
        .add_modifier(Modifier::BOLD);
    let plain = Style::default()
        .fg(app.theme.button_fg)
        .bg(app.theme.button_bg)
        .add_modifier(Modifier::BOLD);
    render_dialog(
        frame,
        app,
        area,
        " Delete Task",
        CONFIRM_DELETE_TEXT,
        task_title.as_deref(),
        &[
            ("[ y Delete ]", danger, HitTarget::ConfirmYes),
            ("[ n Cancel ]", plain, HitTarget::ConfirmNo),
        ],
    );
}

/// Blocking notice, e.g. a validation failure
pub fn render_notice_popup(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(message) = app.notice.clone() else {
        return;
    };
    let ok = Style::default()
        .fg(app.theme.button_fg)
        .bg(app.theme.button_bg)
        .add_modifier(Modifier::BOLD);
    render_dialog(
        frame,
        app,
        area,
        " Notice",
        &message,
        None,
        &[("[ OK ]", ok, HitTarget::NoticeOk)],
    );
}

/// Bordered box: header, wrapped message, optional quoted detail, and a
/// right-aligned row of buttons
fn render_dialog(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    header: &str,
    message: &str,
    detail: Option<&str>,
    buttons: &[(&str, Style, HitTarget)],
) {
    let bg = app.theme.background;
    let inner_w = DIALOG_W.saturating_sub(2) as usize;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut lines = vec![
        Line::from(Span::styled(header.to_string(), header_style)),
        Line::from(""),
    ];
    for s in wrap_to_width(message, inner_w.saturating_sub(2)) {
        lines.push(Line::from(Span::styled(format!(" {}", s), text_style)));
    }
    if let Some(detail) = detail {
        for s in wrap_to_width(detail, inner_w.saturating_sub(4)) {
            lines.push(Line::from(Span::styled(format!("   {}", s), bright_style)));
        }
    }
    lines.push(Line::from(""));
    let button_row = lines.len() as u16;
    lines.push(Line::from(""));

    // Dynamic height from content + 2 for borders
    let popup_h = (lines.len() as u16) + 2;
    let overlay = centered_rect_fixed(DIALOG_W, popup_h, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(overlay);
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay,
    );
    if button_row >= inner.height {
        return;
    }

    let total_w: u16 = buttons
        .iter()
        .map(|(label, _, _)| display_width(label) as u16 + 1)
        .sum();
    let mut x = inner.right().saturating_sub(total_w).max(inner.x);
    let y = inner.y + button_row;
    for (label, style, target) in buttons {
        let w = (display_width(label) as u16).min(inner.right().saturating_sub(x));
        let rect = Rect::new(x, y, w, 1);
        frame.render_widget(Paragraph::new(Span::styled(label.to_string(), *style)), rect);
        app.hit_map.push(rect, *target);
        x += w + 1;
    }
}

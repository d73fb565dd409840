use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Draft;
use crate::ops::modal::ModalKind;
use crate::tui::app::{App, FormField};
use crate::tui::hit::HitTarget;
use crate::util::unicode::{display_width, offset_to_line_col, truncate_to_width, wrap_to_width};

use super::helpers::{centered_rect_fixed, input_line};

pub const SAVE_BUTTON: &str = "[ Save Task ]";
const CLOSE_ICON: &str = "\u{00D7}"; // ×
const MODAL_W: u16 = 64;
/// Content rows plus borders
const MODAL_H: u16 = 18;
const DESCRIPTION_ROWS: u16 = 4;

// Content row offsets inside the border
const ROW_TITLE_LABEL: u16 = 3;
const ROW_TITLE: u16 = 4;
const ROW_SELECT_LABEL: u16 = 6;
const ROW_SELECT: u16 = 7;
const ROW_DESC_LABEL: u16 = 9;
const ROW_DESC: u16 = 10;
const ROW_FOOTER: u16 = 15;

/// Render the add/edit/view modal on top of the board
pub fn render_task_modal(frame: &mut Frame, app: &mut App, area: Rect) {
    let (Some(kind), Some(draft)) = (app.modal.kind(), app.modal.draft().cloned()) else {
        return;
    };
    let overlay = centered_rect_fixed(MODAL_W, MODAL_H, area);
    frame.render_widget(Clear, overlay);

    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let width = inner.width as usize;

    put(
        frame,
        inner,
        0,
        Line::from(Span::styled(format!(" {}", kind.title()), header_style)),
    );
    put(
        frame,
        inner,
        1,
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(kind.subtitle(), width.saturating_sub(2))),
            dim_style,
        )),
    );

    let close = Rect::new(inner.x + inner.width - 2, inner.y, 1, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_ICON, header_style)),
        close,
    );
    app.hit_map.push(close, HitTarget::ModalClose);

    if kind == ModalKind::Viewing {
        render_view_body(frame, app, inner, &draft);
    } else {
        render_form_body(frame, app, inner, &draft);
    }
}

fn render_form_body(frame: &mut Frame, app: &mut App, inner: Rect, draft: &Draft) {
    let theme = &app.theme;
    let bg = theme.background;
    let focus = app.form.focus;
    let field_w = inner.width.saturating_sub(2);
    let half_w = field_w / 2;

    let label = |field: FormField| {
        if field == focus {
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        }
    };
    let input_style = Style::default().fg(theme.text_bright).bg(theme.selection_bg);
    let cursor_style = input_style.add_modifier(Modifier::REVERSED);
    let cursor_for = |field: FormField| (field == focus).then_some(app.form.cursor);

    put(
        frame,
        inner,
        ROW_TITLE_LABEL,
        Line::from(Span::styled(" Title", label(FormField::Title))),
    );
    let title_rect = field_rect(inner, ROW_TITLE, 0, field_w, 1);
    frame.render_widget(
        Paragraph::new(input_line(
            &draft.title,
            cursor_for(FormField::Title),
            field_w as usize,
            input_style,
            cursor_style,
        )),
        title_rect,
    );

    // Time of day and priority side by side
    put(
        frame,
        inner,
        ROW_SELECT_LABEL,
        Line::from(vec![
            Span::styled(
                format!(" {:<w$}", "Time of Day", w = half_w as usize),
                label(FormField::TimeOfDay),
            ),
            Span::styled("Priority", label(FormField::Priority)),
        ]),
    );
    let tod_rect = field_rect(inner, ROW_SELECT, 0, half_w.saturating_sub(2), 1);
    let priority_rect = field_rect(inner, ROW_SELECT, half_w, half_w, 1);
    for (rect, field, value) in [
        (tod_rect, FormField::TimeOfDay, draft.time_of_day.label()),
        (priority_rect, FormField::Priority, draft.priority.label()),
    ] {
        let style = if field == focus {
            input_style.fg(theme.highlight).add_modifier(Modifier::BOLD)
        } else {
            input_style
        };
        let text = format!("\u{2039} {} \u{203A}", value); // ‹ value ›
        let line = input_line(&text, None, rect.width as usize, style, style);
        frame.render_widget(Paragraph::new(line), rect);
    }

    put(
        frame,
        inner,
        ROW_DESC_LABEL,
        Line::from(Span::styled(" Description", label(FormField::Description))),
    );
    let desc_rect = field_rect(inner, ROW_DESC, 0, field_w, DESCRIPTION_ROWS);
    let desc_cursor = cursor_for(FormField::Description);
    let (cursor_line, cursor_col) =
        desc_cursor.map_or((0, 0), |c| offset_to_line_col(&draft.description, c));
    let first = cursor_line.saturating_sub(DESCRIPTION_ROWS as usize - 1);
    let mut desc_lines: Vec<Line> = draft
        .description
        .split('\n')
        .enumerate()
        .skip(first)
        .take(DESCRIPTION_ROWS as usize)
        .map(|(i, text)| {
            let cursor = desc_cursor.filter(|_| i == cursor_line).map(|_| cursor_col);
            input_line(text, cursor, field_w as usize, input_style, cursor_style)
        })
        .collect();
    while desc_lines.len() < DESCRIPTION_ROWS as usize {
        desc_lines.push(input_line("", None, field_w as usize, input_style, input_style));
    }
    frame.render_widget(Paragraph::new(desc_lines), desc_rect);

    put(
        frame,
        inner,
        ROW_FOOTER,
        Line::from(Span::styled(
            " Tab next  Ctrl-S save  Esc cancel",
            Style::default().fg(theme.dim).bg(bg),
        )),
    );

    // Save button, right-aligned
    let button_w = display_width(SAVE_BUTTON) as u16;
    let save_style = if focus == FormField::Save {
        Style::default()
            .fg(theme.button_fg)
            .bg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.button_fg)
            .bg(theme.button_bg)
            .add_modifier(Modifier::BOLD)
    };
    let save_rect = field_rect(
        inner,
        ROW_FOOTER,
        field_w.saturating_sub(button_w),
        button_w,
        1,
    );
    frame.render_widget(Paragraph::new(Span::styled(SAVE_BUTTON, save_style)), save_rect);

    let hit_map = &mut app.hit_map;
    hit_map.push(title_rect, HitTarget::Field(FormField::Title));
    hit_map.push(tod_rect, HitTarget::Field(FormField::TimeOfDay));
    hit_map.push(priority_rect, HitTarget::Field(FormField::Priority));
    hit_map.push(desc_rect, HitTarget::Field(FormField::Description));
    hit_map.push(save_rect, HitTarget::ModalSave);
}

fn render_view_body(frame: &mut Frame, app: &App, inner: Rect, draft: &Draft) {
    let theme = &app.theme;
    let bg = theme.background;
    let label_style = Style::default()
        .fg(theme.dim)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(theme.text_bright).bg(bg);
    let field_w = inner.width.saturating_sub(2) as usize;
    let half_w = field_w / 2;

    put(frame, inner, ROW_TITLE_LABEL, Line::from(Span::styled(" Title", label_style)));
    put(
        frame,
        inner,
        ROW_TITLE,
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(&draft.title, field_w)),
            value_style,
        )),
    );

    put(
        frame,
        inner,
        ROW_SELECT_LABEL,
        Line::from(Span::styled(
            format!(" {:<w$}Priority", "Time of Day", w = half_w),
            label_style,
        )),
    );
    put(
        frame,
        inner,
        ROW_SELECT,
        Line::from(vec![
            Span::styled(
                format!(" {:<w$}", draft.time_of_day.label(), w = half_w),
                value_style,
            ),
            Span::styled(
                draft.priority.label(),
                value_style.fg(theme.priority_color(draft.priority)),
            ),
        ]),
    );

    put(
        frame,
        inner,
        ROW_DESC_LABEL,
        Line::from(Span::styled(" Description", label_style)),
    );
    let wrapped = wrap_to_width(&draft.description, field_w);
    let rows = DESCRIPTION_ROWS as usize;
    let lines: Vec<Line> = if draft.description.trim().is_empty() {
        vec![Line::from(Span::styled(
            " No description",
            Style::default().fg(theme.dim).bg(bg),
        ))]
    } else {
        wrapped
            .iter()
            .take(rows)
            .enumerate()
            .map(|(i, text)| {
                let text = if i + 1 == rows && wrapped.len() > rows {
                    format!("{}\u{2026}", truncate_to_width(text, field_w.saturating_sub(1)))
                } else {
                    text.clone()
                };
                Line::from(Span::styled(format!(" {}", text), value_style))
            })
            .collect()
    };
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        field_rect(inner, ROW_DESC, 0, inner.width, DESCRIPTION_ROWS),
    );

    let status_color = if draft.completed {
        theme.green
    } else {
        theme.orange
    };
    let status = if draft.completed {
        "Completed"
    } else {
        "Pending"
    };
    put(
        frame,
        inner,
        ROW_FOOTER,
        Line::from(vec![
            Span::styled(" Status: ", label_style),
            Span::styled(status, value_style.fg(status_color)),
        ]),
    );
}

/// Draw a single line at content row `row`, if the modal is tall enough
fn put(frame: &mut Frame, inner: Rect, row: u16, line: Line) {
    if row < inner.height {
        frame.render_widget(
            Paragraph::new(line),
            Rect::new(inner.x, inner.y + row, inner.width, 1),
        );
    }
}

/// Field area at content row `row`, indented one cell past `dx`, clipped to
/// the modal
fn field_rect(inner: Rect, row: u16, dx: u16, width: u16, height: u16) -> Rect {
    if row >= inner.height {
        return Rect::new(inner.x, inner.y, 0, 0);
    }
    let x = inner.x + (1 + dx).min(inner.width);
    let width = width.min(inner.right().saturating_sub(x));
    let height = height.min(inner.height - row);
    Rect::new(x, inner.y + row, width, height)
}

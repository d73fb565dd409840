use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Task, TimeOfDay};
use crate::ops::grouping::{EMPTY_GROUP_TEXT, group_by_time_of_day};
use crate::tui::app::{App, Mode};
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::pad_to_width;

/// Rows per card: title line, description line, gap
const CARD_H: u16 = 3;

const TOGGLE_OPEN: &str = "\u{25CB}"; // ○
const TOGGLE_DONE: &str = "\u{2714}"; // ✔
const EDIT_ICON: &str = "\u{270E}"; // ✎
const DELETE_ICON: &str = "\u{2717}"; // ✗

/// Render the three time-of-day columns
pub fn render_board(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);
    for (tod, column) in TimeOfDay::ALL.into_iter().zip(columns.iter()) {
        render_column(frame, app, tod, *column);
    }
}

fn render_column(frame: &mut Frame, app: &mut App, tod: TimeOfDay, area: Rect) {
    let bg = app.theme.background;
    let has_focus = app.selection.group == tod && app.mode() == Mode::Navigate;
    let border_color = if has_focus {
        app.theme.highlight
    } else {
        app.theme.border
    };
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Line::from(Span::styled(format!(" {} ", tod.label()), title_style)))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let groups = group_by_time_of_day(app.store.tasks());
    let group = groups.get(tod);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", group.active_text()), dim_style)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let cards = Rect::new(
        inner.x,
        inner.y + 2.min(inner.height),
        inner.width,
        inner.height.saturating_sub(2),
    );
    if cards.height == 0 {
        return;
    }
    if group.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                truncate_to_width(EMPTY_GROUP_TEXT, cards.width as usize),
                dim_style,
            ))
            .centered(),
            Rect::new(cards.x, cards.y, cards.width, 1),
        );
        return;
    }

    // Keep the selected card inside the visible window
    let visible = (cards.height / CARD_H).max(1) as usize;
    let len = group.len();
    let selected = (app.selection.group == tod).then(|| app.selection.index.min(len - 1));
    let scroll = &mut app.scroll[tod.index()];
    if let Some(sel) = selected {
        if sel < *scroll {
            *scroll = sel;
        } else if sel >= *scroll + visible {
            *scroll = sel + 1 - visible;
        }
    }
    *scroll = (*scroll).min(len.saturating_sub(visible));
    let first = *scroll;

    for (slot, (i, task)) in group
        .tasks
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let y = cards.y + slot as u16 * CARD_H;
        let height = 2.min(cards.bottom().saturating_sub(y));
        let rect = Rect::new(cards.x, y, cards.width, height);
        render_card(
            frame,
            &app.theme,
            &mut app.hit_map,
            task,
            rect,
            selected == Some(i),
        );
    }
}

/// One card: status toggle, priority tag, title and controls on the first
/// row, description on the second. The card is registered before its
/// controls so the controls win the hit test.
fn render_card(
    frame: &mut Frame,
    theme: &Theme,
    hit_map: &mut HitMap,
    task: &Task,
    rect: Rect,
    selected: bool,
) {
    let width = rect.width as usize;
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().fg(theme.text).bg(bg);

    let (toggle, toggle_style) = if task.completed {
        (TOGGLE_DONE, base.fg(theme.green))
    } else {
        (TOGGLE_OPEN, base.fg(theme.dim))
    };
    let pill = format!("[{}]", task.priority.tag());
    let mut title_style = base.fg(theme.text_bright);
    if task.completed {
        title_style = title_style
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT);
    }
    if selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    // " ○ [tag] title ... ✎ ✗ "
    let controls_w = 4;
    let lead_w = 3 + display_width(&pill) + 1;
    let title_budget = width.saturating_sub(lead_w + controls_w + 1);

    let mut top = vec![
        Span::styled(" ", base),
        Span::styled(toggle, toggle_style),
        Span::styled(" ", base),
        Span::styled(pill, base.fg(theme.priority_color(task.priority))),
        Span::styled(" ", base),
        Span::styled(truncate_to_width(&task.title, title_budget), title_style),
    ];
    pad_to_width(&mut top, width.saturating_sub(controls_w), base);
    top.extend([
        Span::styled(EDIT_ICON, base.fg(theme.blue)),
        Span::styled(" ", base),
        Span::styled(DELETE_ICON, base.fg(theme.red)),
        Span::styled(" ", base),
    ]);

    let description = task.description.replace('\n', " ");
    let mut bottom = vec![
        Span::styled("   ", base),
        Span::styled(
            truncate_to_width(&description, width.saturating_sub(4)),
            base.fg(theme.dim),
        ),
    ];
    pad_to_width(&mut bottom, width, base);

    frame.render_widget(
        Paragraph::new(vec![Line::from(top), Line::from(bottom)]),
        rect,
    );

    hit_map.push(rect, HitTarget::Card(task.id));
    if width >= lead_w + controls_w {
        let w = rect.width;
        hit_map.push(Rect::new(rect.x + 1, rect.y, 1, 1), HitTarget::Toggle(task.id));
        hit_map.push(Rect::new(rect.x + w - 4, rect.y, 1, 1), HitTarget::Edit(task.id));
        hit_map.push(Rect::new(rect.x + w - 2, rect.y, 1, 1), HitTarget::Delete(task.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Draft;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_seeded_board() {
        let mut app = app_seeded();
        let output = draw(&mut app);
        for needle in [
            " Morning ",
            " Afternoon ",
            " Evening ",
            "Design System Updates",
            "Bug Fixes",
            "Feature Request",
            "[high]",
            "[low]",
            "[medium]",
            "0 active tasks",
            "Update color palette",
        ] {
            assert!(output.contains(needle), "missing {needle:?} in\n{output}");
        }
        assert!(output.contains(TOGGLE_DONE));
        assert!(!output.contains(EMPTY_GROUP_TEXT));
    }

    #[test]
    fn test_empty_groups_show_placeholder() {
        let mut app = app_empty();
        let output = draw(&mut app);
        assert_eq!(output.matches(EMPTY_GROUP_TEXT).count(), 3);
        assert_eq!(output.matches("0 active tasks").count(), 3);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut app = app_seeded();
        for i in 0..10 {
            app.store
                .create(&Draft::blank().with_title(format!("Item {i:02}")))
                .unwrap();
        }
        app.selection.index = 10;
        let output = draw(&mut app);
        assert!(app.scroll[0] > 0);
        assert!(output.contains("Item 09"));
        assert!(!output.contains("Design System Updates"));

        app.selection.index = 0;
        let output = draw(&mut app);
        assert_eq!(app.scroll[0], 0);
        assert!(output.contains("Design System Updates"));
    }

    #[test]
    fn test_controls_registered_inside_card() {
        let mut app = app_seeded();
        draw(&mut app);
        let card = app.hit_map.rect_of(HitTarget::Card(1)).unwrap();
        for target in [HitTarget::Toggle(1), HitTarget::Edit(1), HitTarget::Delete(1)] {
            let rect = app.hit_map.rect_of(target).unwrap();
            assert!(card.contains(rect.as_position()), "{target:?} outside card");
            assert_eq!(app.hit_map.target_at(rect.x, rect.y), Some(target));
        }
    }
}

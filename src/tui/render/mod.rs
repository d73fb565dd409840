pub mod board_view;
pub mod dialogs;
pub mod header;
pub mod help_overlay;
mod helpers;
pub mod status_row;
pub mod task_modal;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: board first, then overlays from bottom to top.
/// The hit map is rebuilt in the same order, so the topmost layer wins
/// mouse hits.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.hit_map.clear();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (3 rows) | board | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title, summary, gap
            Constraint::Min(1),    // columns
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    board_view::render_board(frame, app, chunks[1]);

    if app.modal.is_open() {
        task_modal::render_task_modal(frame, app, area);
    }
    if app.confirm.is_some() {
        dialogs::render_confirm_popup(frame, app, area);
    }
    if app.notice.is_some() {
        dialogs::render_notice_popup(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::header;
    use super::test_helpers::*;
    use crate::tui::hit::HitTarget;

    #[test]
    fn test_header_and_summary() {
        let mut app = app_seeded();
        let output = draw(&mut app);
        assert!(output.contains("Daily Tasks"));
        assert!(output.contains("1 of 3 tasks completed"));
        assert!(output.contains(header::ADD_BUTTON));
        assert!(app.hit_map.rect_of(HitTarget::AddTask).is_some());
    }

    #[test]
    fn test_summary_tracks_toggles() {
        let mut app = app_seeded();
        app.toggle(1);
        app.toggle(3);
        let output = draw(&mut app);
        assert!(output.contains("3 of 3 tasks completed"));

        let mut app = app_empty();
        assert!(draw(&mut app).contains("0 of 0 tasks completed"));
    }

    #[test]
    fn test_help_overlay_lists_keys() {
        let mut app = app_seeded();
        app.show_help = true;
        let output = draw(&mut app);
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Toggle complete"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app_seeded();
        app.open_add();
        app.notice = Some("Task title is required".into());
        render_to_string(12, 4, |frame, _| super::render(frame, &mut app));
    }
}

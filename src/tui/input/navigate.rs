use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => move_cursor(app, 1),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => move_cursor(app, -1),
        (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => switch_group(app, false),
        (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) | (_, KeyCode::Tab) => {
            switch_group(app, true)
        }
        (_, KeyCode::BackTab) => switch_group(app, false),
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => app.selection.index = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.selection.index = app.group_len(app.selection.group).saturating_sub(1);
        }

        // Actions
        (KeyModifiers::NONE, KeyCode::Char('a')) => app.open_add(),
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(id) = app.selected_task().map(|t| t.id) {
                app.toggle(id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            if let Some(id) = app.selected_task().map(|t| t.id) {
                app.open_edit(id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            if let Some(id) = app.selected_task().map(|t| t.id) {
                app.request_delete(id);
            }
        }
        (_, KeyCode::Enter) => {
            if let Some(id) = app.selected_task().map(|t| t.id) {
                app.open_view(id);
            }
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.group_len(app.selection.group);
    if len == 0 {
        app.selection.index = 0;
        return;
    }
    let current = app.selection.index.min(len - 1);
    app.selection.index = current.saturating_add_signed(delta).min(len - 1);
}

/// Move to the neighbouring column, wrapping around
fn switch_group(app: &mut App, forward: bool) {
    let group = app.selection.group;
    app.selection.group = if forward { group.next() } else { group.prev() };
    app.clamp_selection();
}

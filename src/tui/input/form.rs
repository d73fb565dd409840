use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Draft;
use crate::ops::modal::ModalKind;
use crate::tui::app::{App, FormField};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left};

pub(super) fn handle_modal(app: &mut App, key: KeyEvent) {
    match app.modal.kind() {
        Some(ModalKind::Viewing) => handle_view(app, key),
        Some(ModalKind::Adding | ModalKind::Editing) => handle_form(app, key),
        None => {}
    }
}

/// Read-only modal: close is the only way out
fn handle_view(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char(' ')
    ) {
        app.close_modal();
    }
}

fn handle_form(app: &mut App, key: KeyEvent) {
    // Form-wide keys
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.close_modal();
            return;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => {
            app.submit_form();
            return;
        }
        (_, KeyCode::Tab) => {
            focus(app, app.form.focus.next());
            return;
        }
        (_, KeyCode::BackTab) => {
            focus(app, app.form.focus.prev());
            return;
        }
        _ => {}
    }

    match app.form.focus {
        FormField::Title => {
            if key.code == KeyCode::Enter {
                app.submit_form();
            } else {
                edit_text(app, key, FormField::Title);
            }
        }
        FormField::Description => edit_text(app, key, FormField::Description),
        FormField::TimeOfDay => match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                app.modal.update_draft(|d| {
                    let prev = d.time_of_day.prev();
                    d.with_time_of_day(prev)
                });
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                app.modal.update_draft(|d| {
                    let next = d.time_of_day.next();
                    d.with_time_of_day(next)
                });
            }
            KeyCode::Enter => app.submit_form(),
            _ => {}
        },
        FormField::Priority => match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                app.modal.update_draft(|d| {
                    let prev = d.priority.prev();
                    d.with_priority(prev)
                });
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                app.modal.update_draft(|d| {
                    let next = d.priority.next();
                    d.with_priority(next)
                });
            }
            KeyCode::Enter => app.submit_form(),
            _ => {}
        },
        FormField::Save => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.submit_form();
            }
        }
    }
}

/// Move focus; text fields put the cursor at the end of their value
pub(crate) fn focus(app: &mut App, field: FormField) {
    app.form.focus = field;
    app.form.cursor = app
        .modal
        .draft()
        .and_then(|d| field_text(d, field))
        .map_or(0, str::len);
}

fn field_text(draft: &Draft, field: FormField) -> Option<&str> {
    match field {
        FormField::Title => Some(&draft.title),
        FormField::Description => Some(&draft.description),
        _ => None,
    }
}

/// Single editing step on a text field. The new value is computed from the
/// current draft and written back as a fresh draft.
fn edit_text(app: &mut App, key: KeyEvent, field: FormField) {
    let Some(current) = app.modal.draft().and_then(|d| field_text(d, field)) else {
        return;
    };
    let mut text = current.to_string();
    let mut cursor = app.form.cursor.min(text.len());

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('w')) | (KeyModifiers::ALT, KeyCode::Backspace) => {
            let start = word_boundary_left(&text, cursor);
            text.replace_range(start..cursor, "");
            cursor = start;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            text.replace_range(..cursor, "");
            cursor = 0;
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            text.insert(cursor, c);
            cursor += c.len_utf8();
        }
        (_, KeyCode::Enter) if field == FormField::Description => {
            text.insert(cursor, '\n');
            cursor += 1;
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = prev_grapheme_boundary(&text, cursor) {
                text.replace_range(prev..cursor, "");
                cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = next_grapheme_boundary(&text, cursor) {
                text.replace_range(cursor..next, "");
            }
        }
        (_, KeyCode::Left) => {
            cursor = prev_grapheme_boundary(&text, cursor).unwrap_or(0);
        }
        (_, KeyCode::Right) => {
            cursor = next_grapheme_boundary(&text, cursor).unwrap_or(text.len());
        }
        (_, KeyCode::Home) => cursor = 0,
        (_, KeyCode::End) => cursor = text.len(),
        _ => return,
    }

    app.form.cursor = cursor;
    app.modal.update_draft(|d| match field {
        FormField::Description => d.with_description(text),
        _ => d.with_title(text),
    });
}

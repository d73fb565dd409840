mod confirm;
mod form;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

pub use mouse::handle_click;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    app.status_message = None;

    // Help overlay intercepts everything until closed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.mode() {
        Mode::Notice => {
            // Blocking: only an explicit acknowledgement clears it
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.dismiss_notice();
            }
        }
        Mode::Confirm => confirm::handle_confirm(app, key),
        Mode::Modal => form::handle_modal(app, key),
        Mode::Navigate => navigate::handle_navigate(app, key),
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn shift_tab() -> KeyEvent {
        KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::model::UiConfig;
    use crate::ops::store::TaskStore;

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = App::new(TaskStore::seeded(), &UiConfig::default());
        app.open_add();
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_notice_swallows_keys() {
        let mut app = App::new(TaskStore::seeded(), &UiConfig::default());
        app.open_add();
        app.notice = Some("Task title is required".into());

        handle_key(&mut app, ch('x'));
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.mode(), Mode::Notice);
        assert_eq!(app.modal.draft().unwrap().title, "");

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode(), Mode::Modal);
    }

    #[test]
    fn test_help_overlay_toggle() {
        let mut app = App::new(TaskStore::seeded(), &UiConfig::default());
        handle_key(&mut app, ch('?'));
        assert!(app.show_help);
        handle_key(&mut app, ch('a'));
        assert!(!app.modal.is_open());
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }
}

use crate::tui::app::{App, Mode};
use crate::tui::hit::HitTarget;

use super::form::focus;

/// Handle a left click at a terminal cell. Only targets belonging to the
/// topmost layer react; clicks elsewhere are dropped.
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    let Some(target) = app.hit_map.target_at(column, row) else {
        return;
    };
    app.status_message = None;
    if app.show_help {
        app.show_help = false;
        return;
    }

    match (app.mode(), target) {
        (Mode::Notice, HitTarget::NoticeOk) => app.dismiss_notice(),
        (Mode::Confirm, HitTarget::ConfirmYes) => app.resolve_delete(true),
        (Mode::Confirm, HitTarget::ConfirmNo) => app.resolve_delete(false),
        (Mode::Modal, HitTarget::ModalClose) => app.close_modal(),
        (Mode::Modal, HitTarget::ModalSave) => app.submit_form(),
        (Mode::Modal, HitTarget::Field(field)) => {
            if app.modal.kind().is_some_and(|k| k.is_editable()) {
                focus(app, field);
            }
        }
        (Mode::Navigate, HitTarget::AddTask) => app.open_add(),
        (Mode::Navigate, HitTarget::Toggle(id)) => {
            app.select_task(id);
            app.toggle(id);
        }
        (Mode::Navigate, HitTarget::Edit(id)) => app.open_edit(id),
        (Mode::Navigate, HitTarget::Delete(id)) => {
            app.select_task(id);
            app.request_delete(id);
        }
        (Mode::Navigate, HitTarget::Card(id)) => app.open_view(id),
        _ => {}
    }
}

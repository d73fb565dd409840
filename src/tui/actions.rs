//! Board actions shared by the keyboard and mouse handlers.

use tracing::warn;

use crate::model::TaskId;
use crate::ops::store::{PendingDelete, StoreError};

use super::app::{App, FormField, FormState};

impl App {
    /// "Add New Task": blank draft, focus on the title
    pub fn open_add(&mut self) {
        self.modal.open_add();
        self.form = FormState::default();
    }

    pub fn open_edit(&mut self, id: TaskId) {
        let Some(task) = self.store.get(id) else {
            self.report_missing(id);
            return;
        };
        self.modal.open_edit(task);
        self.form = FormState {
            focus: FormField::Title,
            cursor: task.title.len(),
        };
        self.select_task(id);
    }

    pub fn open_view(&mut self, id: TaskId) {
        let Some(task) = self.store.get(id) else {
            self.report_missing(id);
            return;
        };
        self.modal.open_view(task);
        self.select_task(id);
    }

    /// Cancel or dismiss the open modal
    pub fn close_modal(&mut self) {
        self.modal.close();
        self.form = FormState::default();
    }

    /// Flip completion without opening anything
    pub fn toggle(&mut self, id: TaskId) {
        match self.store.toggle_complete(id) {
            Ok(task) => {
                let verb = if task.completed { "completed" } else { "reopened" };
                self.status_message = Some(format!("{} \"{}\"", verb, task.title));
            }
            Err(_) => self.report_missing(id),
        }
    }

    /// Park a delete until the user answers the prompt
    pub fn request_delete(&mut self, id: TaskId) {
        if self.store.get(id).is_none() {
            self.report_missing(id);
            return;
        }
        self.confirm = Some(PendingDelete { id });
    }

    pub fn resolve_delete(&mut self, confirmed: bool) {
        let Some(pending) = self.confirm.take() else {
            return;
        };
        if let Some(task) = pending.resolve(&mut self.store, confirmed) {
            self.status_message = Some(format!("deleted \"{}\"", task.title));
            self.clamp_selection();
        }
    }

    /// Save the form. A blank title raises the blocking notice and leaves the
    /// modal open; anything else closes it.
    pub fn submit_form(&mut self) {
        match self.modal.submit(&mut self.store) {
            Ok(Some(task)) => {
                self.form = FormState::default();
                self.select_task(task.id);
                self.status_message = Some(format!("saved \"{}\"", task.title));
            }
            Ok(None) => {}
            Err(StoreError::EmptyTitle) => {
                self.notice = Some(StoreError::EmptyTitle.to_string());
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.form = FormState::default();
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Stale ids are a sequencing slip, not a crash: log and tell the user
    fn report_missing(&mut self, id: TaskId) {
        warn!(id, "action on missing task");
        self.status_message = Some(StoreError::NotFound(id).to_string());
    }
}

use tracing::{debug, warn};

use crate::model::draft::Draft;
use crate::model::task::Task;
use crate::ops::store::{StoreError, TaskStore};

/// Which modal is open. The draft lives inside the open state, so a closed
/// controller has no draft at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Adding(Draft),
    Editing(Draft),
    Viewing(Draft),
}

/// Kind of open modal, without its draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Adding,
    Editing,
    Viewing,
}

impl ModalKind {
    pub fn title(self) -> &'static str {
        match self {
            ModalKind::Adding => "Add New Task",
            ModalKind::Editing => "Edit Task",
            ModalKind::Viewing => "View Task",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ModalKind::Adding => "Create a new task with title, priority, and optional notes.",
            ModalKind::Editing | ModalKind::Viewing => "Modify the task details below.",
        }
    }

    pub fn is_editable(self) -> bool {
        !matches!(self, ModalKind::Viewing)
    }
}

/// Drives the add/edit/view modal and its draft.
/// At most one modal is open; opening another replaces it.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        ModalController::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn kind(&self) -> Option<ModalKind> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::Adding(_) => Some(ModalKind::Adding),
            ModalState::Editing(_) => Some(ModalKind::Editing),
            ModalState::Viewing(_) => Some(ModalKind::Viewing),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::Adding(d) | ModalState::Editing(d) | ModalState::Viewing(d) => Some(d),
        }
    }

    pub fn open_add(&mut self) {
        self.state = ModalState::Adding(Draft::blank());
    }

    pub fn open_edit(&mut self, task: &Task) {
        self.state = ModalState::Editing(Draft::from_task(task));
    }

    pub fn open_view(&mut self, task: &Task) {
        self.state = ModalState::Viewing(Draft::from_task(task));
    }

    /// Close whatever is open; the draft is discarded
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Replace the draft with `f(draft)`. No effect unless adding or editing.
    pub fn update_draft(&mut self, f: impl FnOnce(Draft) -> Draft) {
        self.state = match std::mem::take(&mut self.state) {
            ModalState::Adding(d) => ModalState::Adding(f(d)),
            ModalState::Editing(d) => ModalState::Editing(f(d)),
            other => other,
        };
    }

    /// Save the open form.
    ///
    /// A blank title keeps the modal open with the draft as typed. Otherwise
    /// the draft goes to `create` (no id) or `update` (has id) and the modal
    /// closes. Viewing and closed states have no save path: `Ok(None)`.
    pub fn submit(&mut self, store: &mut TaskStore) -> Result<Option<Task>, StoreError> {
        let draft = match &self.state {
            ModalState::Adding(d) | ModalState::Editing(d) => d,
            ModalState::Viewing(_) | ModalState::Closed => return Ok(None),
        };
        if draft.has_blank_title() {
            debug!("save blocked: empty title");
            return Err(StoreError::EmptyTitle);
        }

        let result = match draft.id {
            None => store.create(draft),
            Some(id) => store.update(id, draft),
        };
        match result {
            Ok(task) => {
                self.close();
                Ok(Some(task))
            }
            Err(e) => {
                if !e.is_validation() {
                    warn!(error = %e, "dropping stale draft");
                    self.close();
                }
                Err(e)
            }
        }
    }
}

use super::task::{Priority, Task, TaskId, TimeOfDay, is_blank_title};

/// The editable copy of a task bound to an open modal's form.
///
/// Drafts are values: every edit consumes the draft and returns a new one,
/// so the add/edit/view flows never share a mutable object with the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// `None` until the draft has been committed as a task
    pub id: Option<TaskId>,
    pub title: String,
    pub description: String,
    pub time_of_day: TimeOfDay,
    pub priority: Priority,
    pub completed: bool,
}

impl Draft {
    /// Blank template used by "Add New Task": Morning, medium, not completed
    pub fn blank() -> Self {
        Draft::default()
    }

    /// Copy of an existing task (edit and view flows)
    pub fn from_task(task: &Task) -> Self {
        Draft {
            id: Some(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            time_of_day: task.time_of_day,
            priority: task.priority,
            completed: task.completed,
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Draft {
            title: title.into(),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Draft {
            description: description.into(),
            ..self
        }
    }

    pub fn with_time_of_day(self, time_of_day: TimeOfDay) -> Self {
        Draft {
            time_of_day,
            ..self
        }
    }

    pub fn with_priority(self, priority: Priority) -> Self {
        Draft { priority, ..self }
    }

    pub fn with_completed(self, completed: bool) -> Self {
        Draft { completed, ..self }
    }

    pub fn has_blank_title(&self) -> bool {
        is_blank_title(&self.title)
    }

    /// Build the committed task for `id` from this draft's fields
    pub(crate) fn to_task(&self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            time_of_day: self.time_of_day,
            priority: self.priority,
            completed: self.completed,
        }
    }
}

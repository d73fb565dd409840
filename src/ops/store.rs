use chrono::Utc;
use tracing::{debug, warn};

use crate::model::draft::Draft;
use crate::model::task::{Priority, Task, TaskId, TimeOfDay};

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Task title is required")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("duplicate task id: {0}")]
    DuplicateId(TaskId),
    #[error("no task ids left")]
    IdsExhausted,
}

impl StoreError {
    /// Validation failures are shown to the user; the rest are sequencing bugs
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::EmptyTitle)
    }
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Time-based id source. Ids are milliseconds since the epoch, bumped past
/// the previous id whenever the clock has not advanced.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: TaskId,
    clock: fn() -> u64,
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::with_clock(now_millis)
    }
}

impl IdGenerator {
    pub fn with_clock(clock: fn() -> u64) -> Self {
        IdGenerator { last: 0, clock }
    }

    /// Never hand out anything at or below `id`
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id);
    }

    /// `None` once the id space is used up
    pub fn next_id(&mut self) -> Option<TaskId> {
        let id = (self.clock)().max(self.last.checked_add(1)?);
        self.last = id;
        Some(id)
    }
}

// ---------------------------------------------------------------------------
// Delete confirmation
// ---------------------------------------------------------------------------

/// Caller-supplied yes/no decision taken before a delete
pub trait ConfirmDelete {
    fn confirm(&mut self, task: &Task) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: FnMut(&Task) -> bool,
{
    fn confirm(&mut self, task: &Task) -> bool {
        self(task)
    }
}

/// A delete waiting on an asynchronous answer (e.g. a prompt on screen)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: TaskId,
}

impl PendingDelete {
    /// Apply the user's answer. Returns the removed task, if any.
    pub fn resolve(self, store: &mut TaskStore, confirmed: bool) -> Option<Task> {
        if confirmed {
            store.delete(self.id)
        } else {
            debug!(id = self.id, "delete cancelled");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// The authoritative, insertion-ordered task collection for one session.
///
/// Every operation validates before it touches the collection, so a failed
/// call leaves the store exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Store holding the three sample tasks
    pub fn seeded() -> Self {
        let mut store = TaskStore::new();
        for task in seed_tasks() {
            store.ids.observe(task.id);
            store.tasks.push(task);
        }
        store
    }

    /// Store over an existing collection. Ids must be unique.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, StoreError> {
        let mut store = TaskStore::new();
        for task in tasks {
            if store.get(task.id).is_some() {
                return Err(StoreError::DuplicateId(task.id));
            }
            store.ids.observe(task.id);
            store.tasks.push(task);
        }
        Ok(store)
    }

    /// Swap the id source, keeping ids unique against current tasks
    pub fn with_id_generator(mut self, mut ids: IdGenerator) -> Self {
        for task in &self.tasks {
            ids.observe(task.id);
        }
        self.ids = ids;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Commit a new task from `draft` at the end of the collection.
    /// Any id already on the draft is ignored.
    pub fn create(&mut self, draft: &Draft) -> Result<Task, StoreError> {
        if draft.has_blank_title() {
            return Err(StoreError::EmptyTitle);
        }
        let id = self.ids.next_id().ok_or_else(|| {
            warn!("task id space exhausted");
            StoreError::IdsExhausted
        })?;
        let task = draft.to_task(id);
        self.tasks.push(task.clone());
        debug!(id, time_of_day = %task.time_of_day, "task created");
        Ok(task)
    }

    /// Overwrite every field of task `id` from `draft`, in place
    pub fn update(&mut self, id: TaskId, draft: &Draft) -> Result<Task, StoreError> {
        let idx = self.position(id).ok_or_else(|| {
            warn!(id, "update on missing task");
            StoreError::NotFound(id)
        })?;
        if draft.has_blank_title() {
            return Err(StoreError::EmptyTitle);
        }
        let task = draft.to_task(id);
        self.tasks[idx] = task.clone();
        debug!(id, "task updated");
        Ok(task)
    }

    /// Remove task `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.position(id)?;
        let removed = self.tasks.remove(idx);
        debug!(id, "task deleted");
        Some(removed)
    }

    /// Ask `confirm` first; delete only on yes. Unknown ids never prompt.
    pub fn delete_confirmed(
        &mut self,
        id: TaskId,
        confirm: &mut impl ConfirmDelete,
    ) -> Option<Task> {
        let task = self.get(id)?;
        if confirm.confirm(task) {
            self.delete(id)
        } else {
            None
        }
    }

    /// Flip `completed` on task `id`, leaving everything else as is
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| {
                warn!(id, "toggle on missing task");
                StoreError::NotFound(id)
            })?;
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "task toggled");
        Ok(task.clone())
    }
}

/// The sample set a default session starts with
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Design System Updates".into(),
            description: "Update color palette and typography in the design system".into(),
            time_of_day: TimeOfDay::Morning,
            priority: Priority::High,
            completed: false,
        },
        Task {
            id: 2,
            title: "Bug Fixes".into(),
            description: "Fix reported issues in the latest release".into(),
            time_of_day: TimeOfDay::Afternoon,
            priority: Priority::Low,
            completed: true,
        },
        Task {
            id: 3,
            title: "Feature Request".into(),
            description: "Add new feature to the application".into(),
            time_of_day: TimeOfDay::Evening,
            priority: Priority::Medium,
            completed: false,
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stalled_clock() -> u64 {
        1_000
    }

    fn draft(title: &str) -> Draft {
        Draft::blank().with_title(title)
    }

    // --- create ---

    #[test]
    fn test_create_appends_and_copies_fields() {
        let mut store = TaskStore::seeded();
        let d = draft("Write report")
            .with_description("Q3 numbers")
            .with_time_of_day(TimeOfDay::Afternoon)
            .with_priority(Priority::High);

        let task = store.create(&d).unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.tasks().last(), Some(&task));
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "Q3 numbers");
        assert_eq!(task.time_of_day, TimeOfDay::Afternoon);
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);
        assert!(![1, 2, 3].contains(&task.id));
    }

    #[test]
    fn test_create_empty_title_rejected() {
        let mut store = TaskStore::seeded();
        let before = store.tasks().to_vec();

        assert_eq!(store.create(&draft("")), Err(StoreError::EmptyTitle));
        assert_eq!(store.create(&draft("   ")), Err(StoreError::EmptyTitle));
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_create_ignores_draft_id() {
        let mut store = TaskStore::seeded();
        let d = Draft {
            id: Some(2),
            ..draft("Copy")
        };
        let task = store.create(&d).unwrap();
        assert_ne!(task.id, 2);
        assert_eq!(store.get(2).unwrap().title, "Bug Fixes");
    }

    #[test]
    fn test_ids_unique_with_stalled_clock() {
        let mut store = TaskStore::new().with_id_generator(IdGenerator::with_clock(stalled_clock));
        let a = store.create(&draft("a")).unwrap();
        let b = store.create(&draft("b")).unwrap();
        let c = store.create(&draft("c")).unwrap();
        assert_eq!(a.id, 1_000);
        assert_eq!(b.id, 1_001);
        assert_eq!(c.id, 1_002);
    }

    #[test]
    fn test_ids_never_collide_with_existing() {
        fn early_clock() -> u64 {
            2
        }
        let mut store = TaskStore::seeded().with_id_generator(IdGenerator::with_clock(early_clock));
        let task = store.create(&draft("late")).unwrap();
        assert_eq!(task.id, 4);
    }

    #[test]
    fn test_create_fails_when_ids_run_out() {
        let mut tasks = seed_tasks();
        tasks[0].id = u64::MAX;
        let mut store = TaskStore::from_tasks(tasks).unwrap();

        assert_eq!(store.create(&draft("x")), Err(StoreError::IdsExhausted));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_clock_at_max_hands_out_one_last_id() {
        fn max_clock() -> u64 {
            u64::MAX
        }
        let mut ids = IdGenerator::with_clock(max_clock);
        assert_eq!(ids.next_id(), Some(u64::MAX));
        assert_eq!(ids.next_id(), None);
    }

    // --- update ---

    #[test]
    fn test_update_in_place() {
        let mut store = TaskStore::seeded();
        let d = Draft::from_task(store.get(1).unwrap())
            .with_title("Design tokens")
            .with_time_of_day(TimeOfDay::Evening);

        let task = store.update(1, &d).unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(store.tasks()[0], task);
        assert_eq!(store.tasks()[0].time_of_day, TimeOfDay::Evening);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_overwrites_completed_from_draft() {
        let mut store = TaskStore::seeded();
        let d = Draft::from_task(store.get(2).unwrap()).with_completed(false);
        store.update(2, &d).unwrap();
        assert!(!store.get(2).unwrap().completed);
    }

    #[test]
    fn test_update_empty_title_leaves_task() {
        let mut store = TaskStore::seeded();
        let before = store.get(3).unwrap().clone();
        let d = Draft::from_task(&before)
            .with_title("")
            .with_priority(Priority::High);

        assert_eq!(store.update(3, &d), Err(StoreError::EmptyTitle));
        assert_eq!(store.get(3), Some(&before));
    }

    #[test]
    fn test_update_missing_id() {
        let mut store = TaskStore::seeded();
        assert_eq!(store.update(99, &draft("x")), Err(StoreError::NotFound(99)));
        // Not-found wins over validation
        assert_eq!(store.update(99, &draft("")), Err(StoreError::NotFound(99)));
    }

    // --- delete ---

    #[test]
    fn test_delete_removes() {
        let mut store = TaskStore::seeded();
        let removed = store.delete(2).unwrap();
        assert_eq!(removed.title, "Bug Fixes");
        let ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = TaskStore::seeded();
        let before = store.tasks().to_vec();
        assert_eq!(store.delete(42), None);
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_delete_confirmed_respects_answer() {
        let mut store = TaskStore::seeded();
        let mut asked = Vec::new();

        let mut say_no = |t: &Task| {
            asked.push(t.id);
            false
        };
        assert_eq!(store.delete_confirmed(1, &mut say_no), None);
        assert_eq!(store.len(), 3);

        let mut say_yes = |_: &Task| true;
        assert!(store.delete_confirmed(1, &mut say_yes).is_some());
        assert_eq!(store.len(), 2);
        assert_eq!(asked, vec![1]);
    }

    #[test]
    fn test_delete_confirmed_unknown_never_asks() {
        let mut store = TaskStore::seeded();
        let mut calls = 0;
        let mut confirm = |_: &Task| {
            calls += 1;
            true
        };
        assert_eq!(store.delete_confirmed(77, &mut confirm), None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_pending_delete_resolution() {
        let mut store = TaskStore::seeded();
        let pending = PendingDelete { id: 3 };
        assert_eq!(pending.resolve(&mut store, false), None);
        assert_eq!(store.len(), 3);
        assert!(pending.resolve(&mut store, true).is_some());
        assert_eq!(store.get(3), None);
    }

    // --- toggle ---

    #[test]
    fn test_toggle_is_involution() {
        let mut store = TaskStore::seeded();
        let original = store.get(1).unwrap().clone();

        let once = store.toggle_complete(1).unwrap();
        assert!(once.completed);
        assert_eq!(once.title, original.title);
        assert_eq!(once.priority, original.priority);

        let twice = store.toggle_complete(1).unwrap();
        assert_eq!(twice, original);
    }

    #[test]
    fn test_toggle_missing_id() {
        let mut store = TaskStore::new();
        assert_eq!(store.toggle_complete(5), Err(StoreError::NotFound(5)));
    }

    // --- construction ---

    #[test]
    fn test_from_tasks_rejects_duplicates() {
        let mut tasks = seed_tasks();
        tasks.push(tasks[0].clone());
        assert_eq!(
            TaskStore::from_tasks(tasks).unwrap_err(),
            StoreError::DuplicateId(1)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::EmptyTitle.to_string(), "Task title is required");
        assert_eq!(StoreError::NotFound(9).to_string(), "task not found: 9");
        assert!(StoreError::EmptyTitle.is_validation());
        assert!(!StoreError::NotFound(9).is_validation());
    }
}

use serde::Serialize;

use crate::model::task::{Task, TimeOfDay};

/// Shown in place of cards when a group has no tasks
pub const EMPTY_GROUP_TEXT: &str = "No tasks for this time period";

/// One time-of-day group: tasks in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup<'a> {
    pub time_of_day: TimeOfDay,
    pub tasks: Vec<&'a Task>,
}

impl TaskGroup<'_> {
    /// Tasks in this group not yet completed
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// "N active tasks"
    pub fn active_text(&self) -> String {
        format!("{} active tasks", self.active_count())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The three groups in Morning/Afternoon/Evening order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroups<'a> {
    groups: [TaskGroup<'a>; 3],
}

impl<'a> TaskGroups<'a> {
    pub fn get(&self, time_of_day: TimeOfDay) -> &TaskGroup<'a> {
        &self.groups[time_of_day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskGroup<'a>> {
        self.groups.iter()
    }
}

/// Partition `tasks` by time of day, keeping insertion order within each group.
/// Recomputed on every call.
pub fn group_by_time_of_day(tasks: &[Task]) -> TaskGroups<'_> {
    let groups = TimeOfDay::ALL.map(|time_of_day| TaskGroup {
        time_of_day,
        tasks: tasks
            .iter()
            .filter(|t| t.time_of_day == time_of_day)
            .collect(),
    });
    TaskGroups { groups }
}

/// Completion counts over the whole collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub completed: usize,
    pub total: usize,
}

impl Summary {
    /// "N of M tasks completed"
    pub fn text(&self) -> String {
        format!("{} of {} tasks completed", self.completed, self.total)
    }
}

pub fn summarize(tasks: &[Task]) -> Summary {
    Summary {
        completed: tasks.iter().filter(|t| t.completed).count(),
        total: tasks.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::draft::Draft;
    use crate::model::task::{Priority, TaskId};
    use crate::ops::store::TaskStore;
    use pretty_assertions::assert_eq;

    fn ids(group: &TaskGroup) -> Vec<TaskId> {
        group.tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_seed_scenario() {
        let store = TaskStore::seeded();
        let summary = summarize(store.tasks());
        assert_eq!(summary, Summary { completed: 1, total: 3 });
        assert_eq!(summary.text(), "1 of 3 tasks completed");

        let groups = group_by_time_of_day(store.tasks());
        assert_eq!(ids(groups.get(TimeOfDay::Morning)), vec![1]);
        assert_eq!(ids(groups.get(TimeOfDay::Afternoon)), vec![2]);
        assert_eq!(ids(groups.get(TimeOfDay::Evening)), vec![3]);
    }

    #[test]
    fn test_create_lands_after_existing_in_group() {
        let mut store = TaskStore::seeded();
        let created = store
            .create(
                &Draft::blank()
                    .with_title("X")
                    .with_time_of_day(TimeOfDay::Evening)
                    .with_priority(Priority::Low),
            )
            .unwrap();

        let groups = group_by_time_of_day(store.tasks());
        assert_eq!(ids(groups.get(TimeOfDay::Evening)), vec![3, created.id]);
    }

    #[test]
    fn test_toggle_afternoon_seed_clears_completed() {
        let mut store = TaskStore::seeded();
        store.toggle_complete(2).unwrap();
        assert_eq!(summarize(store.tasks()).completed, 0);
    }

    #[test]
    fn test_partition_is_exact_and_ordered() {
        let mut store = TaskStore::new();
        let plan = [
            TimeOfDay::Evening,
            TimeOfDay::Morning,
            TimeOfDay::Evening,
            TimeOfDay::Afternoon,
            TimeOfDay::Morning,
            TimeOfDay::Evening,
        ];
        for (i, tod) in plan.iter().enumerate() {
            store
                .create(&Draft::blank().with_title(format!("t{i}")).with_time_of_day(*tod))
                .unwrap();
        }

        let groups = group_by_time_of_day(store.tasks());
        let total: usize = groups.iter().map(|g| g.len()).sum();
        assert_eq!(total, store.len());

        for group in groups.iter() {
            // Every member belongs here, and order matches the collection order
            let expected: Vec<TaskId> = store
                .tasks()
                .iter()
                .filter(|t| t.time_of_day == group.time_of_day)
                .map(|t| t.id)
                .collect();
            assert_eq!(ids(group), expected);
        }

        let titles: Vec<&str> = groups
            .get(TimeOfDay::Evening)
            .tasks
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["t0", "t2", "t5"]);
    }

    #[test]
    fn test_completed_count_tracks_operations() {
        let mut store = TaskStore::seeded();
        let a = store.create(&Draft::blank().with_title("a")).unwrap();
        store.toggle_complete(a.id).unwrap();
        store.toggle_complete(1).unwrap();
        store.delete(2);
        store.toggle_complete(1).unwrap();

        let expected = store.tasks().iter().filter(|t| t.completed).count();
        let summary = summarize(store.tasks());
        assert_eq!(summary.completed, expected);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn test_active_count_per_group() {
        let store = TaskStore::seeded();
        let groups = group_by_time_of_day(store.tasks());
        assert_eq!(groups.get(TimeOfDay::Morning).active_text(), "1 active tasks");
        assert_eq!(groups.get(TimeOfDay::Afternoon).active_count(), 0);
    }

    #[test]
    fn test_empty_store() {
        let groups = group_by_time_of_day(&[]);
        assert!(groups.iter().all(|g| g.is_empty()));
        assert_eq!(summarize(&[]), Summary::default());
    }
}

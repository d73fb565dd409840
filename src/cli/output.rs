use serde::Serialize;

use crate::model::task::{Task, TimeOfDay};
use crate::ops::grouping::{EMPTY_GROUP_TEXT, Summary, TaskGroup, TaskGroups};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct GroupJson<'a> {
    #[serde(rename = "timeOfDay")]
    pub time_of_day: TimeOfDay,
    pub active: usize,
    pub tasks: Vec<&'a Task>,
}

#[derive(Serialize)]
pub struct StatsJson {
    #[serde(flatten)]
    pub summary: Summary,
    pub groups: Vec<GroupStatsJson>,
}

#[derive(Serialize)]
pub struct GroupStatsJson {
    #[serde(rename = "timeOfDay")]
    pub time_of_day: TimeOfDay,
    pub active: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// JSON view of a group; `pending_only` drops completed tasks from the list
/// but not from the active count
pub fn group_to_json<'a>(group: &TaskGroup<'a>, pending_only: bool) -> GroupJson<'a> {
    GroupJson {
        time_of_day: group.time_of_day,
        active: group.active_count(),
        tasks: group
            .tasks
            .iter()
            .copied()
            .filter(|t| !pending_only || !t.completed)
            .collect(),
    }
}

pub fn group_stats_to_json(group: &TaskGroup<'_>) -> GroupStatsJson {
    GroupStatsJson {
        time_of_day: group.time_of_day,
        active: group.active_count(),
        total: group.len(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    format!("[{}] {} #{}", check, task.title, task.priority.tag())
}

/// Format a group: header, then one line per task (description indented
/// beneath), or the placeholder when nothing is left to show
pub fn format_group(group: &TaskGroup<'_>, pending_only: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "== {} ({}) ==",
        group.time_of_day,
        group.active_text()
    )];
    let mut shown = 0;
    for task in group.tasks.iter().filter(|t| !pending_only || !t.completed) {
        lines.push(format_task_line(task));
        for line in task.description.lines() {
            lines.push(format!("    {}", line));
        }
        shown += 1;
    }
    if shown == 0 {
        lines.push(format!("  {}", EMPTY_GROUP_TEXT));
    }
    lines
}

/// Summary line followed by one row per group
pub fn format_stats(summary: &Summary, groups: &TaskGroups<'_>) -> Vec<String> {
    let mut lines = vec![summary.text(), String::new()];
    for group in groups.iter() {
        lines.push(format!(
            " {:<10} {:>3} active  {:>3} total",
            group.time_of_day.label(),
            group.active_count(),
            group.len()
        ));
    }
    lines
}

use serde::{Deserialize, Serialize};

/// Unique task identifier, assigned by the store at creation
pub type TaskId = u64;

/// Which part of the day a task belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// All groups in display order
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }

    /// Position in display order (0..3)
    pub fn index(self) -> usize {
        match self {
            TimeOfDay::Morning => 0,
            TimeOfDay::Afternoon => 1,
            TimeOfDay::Evening => 2,
        }
    }

    /// Next value, wrapping (used by the form's select field)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 3]
    }

    /// Previous value, wrapping
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + 2) % 3]
    }

    /// Parse a group name, case-insensitive
    pub fn parse(s: &str) -> Option<TimeOfDay> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Some(TimeOfDay::Morning),
            "afternoon" => Some(TimeOfDay::Afternoon),
            "evening" => Some(TimeOfDay::Evening),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Task priority tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Lowercase tag as shown on task cards (`low`, `medium`, `high`)
    pub fn tag(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Capitalized name as shown in the form select
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    fn index(self) -> usize {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 3]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + 2) % 3]
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A committed task. Only the store creates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "timeOfDay")]
    pub time_of_day: TimeOfDay,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// "Completed" / "Pending", as shown in the view modal
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}

/// True if the title is empty once surrounding whitespace is removed
pub fn is_blank_title(title: &str) -> bool {
    title.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_cycle() {
        assert_eq!(TimeOfDay::Morning.next(), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::Evening.next(), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::Morning.prev(), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::Afternoon.prev(), TimeOfDay::Morning);
    }

    #[test]
    fn test_time_of_day_parse() {
        assert_eq!(TimeOfDay::parse("evening"), Some(TimeOfDay::Evening));
        assert_eq!(TimeOfDay::parse(" Morning "), Some(TimeOfDay::Morning));
        assert_eq!(TimeOfDay::parse("night"), None);
    }

    #[test]
    fn test_priority_cycle_and_labels() {
        assert_eq!(Priority::Medium.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::High);
        assert_eq!(Priority::High.tag(), "high");
        assert_eq!(Priority::High.label(), "High");
    }

    #[test]
    fn test_task_serde_names() {
        let task = Task {
            id: 7,
            title: "Stretch".into(),
            description: String::new(),
            time_of_day: TimeOfDay::Afternoon,
            priority: Priority::Low,
            completed: true,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["timeOfDay"], "Afternoon");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn test_blank_title() {
        assert!(is_blank_title(""));
        assert!(is_blank_title("   \t"));
        assert!(!is_blank_title(" x "));
    }
}

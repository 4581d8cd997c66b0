// Task module
// Task model mirroring the backend's JSON wire shape

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority as stored by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A task as returned by the backend.
///
/// The client holds a read-mostly copy for the displayed week only; every
/// mutation goes through the backend and is reflected by a fresh fetch.
/// `start_time`/`end_time` are kept as the wire `"HH:MM"` strings; hour
/// components are derived on demand by the layout module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub list_id: Option<i64>,
    #[serde(default)]
    pub is_important: bool,
}

impl Task {
    /// True when the backend stored an explicit start time for this task.
    pub fn has_timing(&self) -> bool {
        self.start_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_task() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Write report",
                "description": "Quarterly numbers",
                "completed": false,
                "priority": "high",
                "due_date": "2024-06-05",
                "start_time": "14:00",
                "end_time": "16:00",
                "list_id": 2,
                "is_important": true
            }"#,
        )
        .unwrap();

        assert_eq!(task.id, 7);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 5));
        assert_eq!(task.start_time.as_deref(), Some("14:00"));
        assert!(task.is_important);
    }

    #[test]
    fn test_deserialize_minimal_task_defaults() {
        let task: Task = serde_json::from_str(r#"{"id": 1, "title": "Call mom"}"#).unwrap();

        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert!(task.start_time.is_none());
        assert!(!task.has_timing());
    }

    #[test]
    fn test_priority_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }
}

// Week module
// The seven-bucket response shape of GET /api/calendar/week

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::task::Task;

pub const DAYS_PER_WEEK: usize = 7;

/// One day bucket: the backend-ordered tasks for a single calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayTasks {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A full week of buckets, Monday first, exactly as the backend sends it.
/// Rebuilt wholesale on every fetch; never persisted client-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekData {
    #[serde(default)]
    pub week_start: Option<NaiveDate>,
    #[serde(default)]
    pub week_end: Option<NaiveDate>,
    #[serde(default)]
    pub days: Vec<DayTasks>,
}

impl WeekData {
    /// The buckets normalized to exactly seven entries. A short or
    /// malformed response still yields a paintable week.
    pub fn into_buckets(mut self) -> Vec<DayTasks> {
        self.days.resize_with(DAYS_PER_WEEK, DayTasks::default);
        self.days
    }

    pub fn task_count(&self) -> usize {
        self.days.iter().map(|day| day.tasks.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_week_response() {
        let week: WeekData = serde_json::from_str(
            r#"{
                "week_start": "2024-06-03",
                "week_end": "2024-06-09",
                "days": [
                    {"date": "2024-06-03", "day_name": "Monday", "tasks": []},
                    {"date": "2024-06-04", "tasks": [{"id": 1, "title": "Standup"}]},
                    {"date": "2024-06-05", "tasks": []},
                    {"date": "2024-06-06", "tasks": []},
                    {"date": "2024-06-07", "tasks": []},
                    {"date": "2024-06-08", "tasks": []},
                    {"date": "2024-06-09", "tasks": []}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(week.days.len(), DAYS_PER_WEEK);
        assert_eq!(week.task_count(), 1);
        assert_eq!(week.days[1].tasks[0].title, "Standup");
    }

    #[test]
    fn test_into_buckets_pads_short_responses() {
        let week: WeekData = serde_json::from_str(r#"{"days": [{"tasks": []}]}"#).unwrap();
        let buckets = week.into_buckets();
        assert_eq!(buckets.len(), DAYS_PER_WEEK);
    }

    #[test]
    fn test_into_buckets_preserves_backend_order() {
        let week: WeekData = serde_json::from_str(
            r#"{"days": [
                {"tasks": [{"id": 2, "title": "b"}, {"id": 1, "title": "a"}]},
                {"tasks": []}, {"tasks": []}, {"tasks": []},
                {"tasks": []}, {"tasks": []}, {"tasks": []}
            ]}"#,
        )
        .unwrap();

        let buckets = week.into_buckets();
        let ids: Vec<i64> = buckets[0].tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}

// Test fixtures - reusable test data
// Provides consistent builders across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use week_planner::models::task::{Priority, Task};
use week_planner::models::week::{DayTasks, WeekData, DAYS_PER_WEEK};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A minimal task: no timing, medium priority, not completed.
pub fn task(id: i64, title: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: None,
        completed: false,
        priority: Priority::Medium,
        due_date: None,
        start_time: None,
        end_time: None,
        list_id: None,
        is_important: false,
    }
}

/// A task with explicit start and end wire strings.
pub fn timed_task(id: i64, title: &str, start: &str, end: &str) -> Task {
    let mut t = task(id, title);
    t.start_time = Some(start.to_string());
    t.end_time = Some(end.to_string());
    t
}

/// An empty week: seven bare buckets.
pub fn empty_week() -> WeekData {
    WeekData {
        week_start: None,
        week_end: None,
        days: (0..DAYS_PER_WEEK).map(|_| DayTasks::default()).collect(),
    }
}

/// A week with the given tasks placed in one day bucket.
pub fn week_with_day(day_index: usize, tasks: Vec<Task>) -> WeekData {
    let mut week = empty_week();
    week.days[day_index].tasks = tasks;
    week
}

// Timeline geometry against the backend's display contract:
// 60 px hour rows, a 40 px block floor, hour-9 default slotting.

mod fixtures;

use fixtures::{date, task, timed_task, week_with_day};
use pretty_assertions::assert_eq;
use week_planner::services::layout::{
    layout_day, SlotGeometry, TaskSlot, DEFAULT_START_HOUR, HOUR_HEIGHT, MIN_BLOCK_HEIGHT,
};
use week_planner::utils::date::{week_dates, week_start_monday};

#[test]
fn due_date_only_task_gets_the_default_morning_slot() {
    let task = task(1, "Water plants");

    let slot = TaskSlot::for_task(&task);
    assert_eq!(slot.start_hour, DEFAULT_START_HOUR);
    assert_eq!(slot.end_hour, DEFAULT_START_HOUR + 1);

    let geometry = SlotGeometry::for_task(&task);
    assert_eq!(geometry.top, 9.0 * HOUR_HEIGHT);
    // One hour is 60 px, so the 40 px floor does not trigger here
    assert_eq!(geometry.height, 60.0);
}

#[test]
fn two_hour_task_renders_120px_tall() {
    let task = timed_task(2, "Deep work", "14:00", "16:00");
    let geometry = SlotGeometry::for_task(&task);
    assert_eq!(geometry.top, 840.0);
    assert_eq!(geometry.height, 120.0);
}

#[test]
fn zero_duration_task_hits_the_40px_floor() {
    let task = timed_task(3, "Ping standup bot", "11:00", "11:00");
    let geometry = SlotGeometry::for_task(&task);
    assert_eq!(geometry.height, MIN_BLOCK_HEIGHT);
}

#[test]
fn inverted_span_also_hits_the_floor() {
    let task = timed_task(4, "Bad data", "15:00", "13:00");
    let geometry = SlotGeometry::for_task(&task);
    assert_eq!(geometry.top, 900.0);
    assert_eq!(geometry.height, MIN_BLOCK_HEIGHT);
}

#[test]
fn sub_hour_starts_are_floored_to_their_hour_bucket() {
    let task = timed_task(5, "Late lunch", "13:45", "14:30");
    let slot = TaskSlot::for_task(&task);
    assert_eq!(slot.start_hour, 13);
    assert_eq!(slot.end_hour, 14);
}

// The worked example from the display contract: week of 2024-06-03, a
// 14:00-16:00 task due on the Wednesday.
#[test]
fn scenario_week_of_june_3rd() {
    let anchor = date(2024, 6, 3);
    assert_eq!(week_start_monday(anchor), anchor, "2024-06-03 is a Monday");

    let dates = week_dates(anchor);
    let due = date(2024, 6, 5);
    let day_index = dates.iter().position(|d| *d == due).unwrap();
    assert_eq!(day_index, 2, "2024-06-05 lands in the Wednesday column");

    let mut task = timed_task(6, "Design review", "14:00", "16:00");
    task.due_date = Some(due);
    let week = week_with_day(day_index, vec![task]);
    let buckets = week.into_buckets();

    let blocks = layout_day(&buckets[day_index]);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].geometry.top, 840.0);
    assert_eq!(blocks[0].geometry.height, 120.0);
}

#[test]
fn same_hour_tasks_stack_without_collision_layout() {
    let week = week_with_day(
        0,
        vec![
            timed_task(7, "First", "10:00", "11:00"),
            timed_task(8, "Second", "10:00", "11:00"),
            timed_task(9, "Third", "10:30", "11:00"),
        ],
    );
    let buckets = week.into_buckets();
    let blocks = layout_day(&buckets[0]);

    let ids: Vec<i64> = blocks.iter().map(|b| b.task.id).collect();
    assert_eq!(ids, vec![7, 8, 9], "backend order is preserved");
    assert_eq!(blocks[0].geometry.top, blocks[2].geometry.top);
}

// The reschedule wire contract: a drop always persists exactly a one-hour
// block at the target cell, and a drop outside the grid persists nothing.

mod fixtures;

use fixtures::{date, timed_task};
use pretty_assertions::assert_eq;
use serde_json::json;
use week_planner::services::api::TimeChange;
use week_planner::ui_egui::drag::{DragSession, DropTarget};

#[test]
fn drop_payload_is_exactly_one_hour() {
    let change = TimeChange::hour_slot(date(2024, 6, 5), 14);

    assert_eq!(
        serde_json::to_value(&change).unwrap(),
        json!({
            "due_date": "2024-06-05",
            "start_time": "14:00",
            "end_time": "15:00"
        })
    );
}

#[test]
fn single_digit_hours_are_zero_padded() {
    let change = TimeChange::hour_slot(date(2024, 6, 5), 9);
    assert_eq!(change.start_time, "09:00");
    assert_eq!(change.end_time, "10:00");
}

#[test]
fn prior_duration_is_never_carried_over() {
    // A two-hour task dropped at 10:00 still collapses to one hour
    let task = timed_task(42, "Workshop", "14:00", "16:00");
    let mut session = DragSession::begin(&task);
    session.enter(DropTarget {
        date: date(2024, 6, 7),
        hour: 10,
    });

    let target = session.finish().unwrap();
    let change = TimeChange::hour_slot(target.date, target.hour);

    assert_eq!(
        serde_json::to_value(&change).unwrap(),
        json!({
            "due_date": "2024-06-07",
            "start_time": "10:00",
            "end_time": "11:00"
        })
    );
}

#[test]
fn drop_outside_any_cell_issues_no_request() {
    let task = timed_task(42, "Workshop", "14:00", "16:00");
    let mut session = DragSession::begin(&task);

    // Hovered a few cells, then left the grid before releasing
    session.enter(DropTarget {
        date: date(2024, 6, 4),
        hour: 8,
    });
    session.enter(DropTarget {
        date: date(2024, 6, 4),
        hour: 9,
    });
    session.leave();

    // No target at release time means no payload is ever built
    assert!(session.finish().is_none());
}

#[test]
fn indicator_tracks_only_the_latest_hovered_cell() {
    let task = timed_task(7, "Errand", "09:00", "10:00");
    let mut session = DragSession::begin(&task);

    session.enter(DropTarget {
        date: date(2024, 6, 4),
        hour: 8,
    });
    session.enter(DropTarget {
        date: date(2024, 6, 6),
        hour: 15,
    });

    assert_eq!(
        session.hovered(),
        Some(DropTarget {
            date: date(2024, 6, 6),
            hour: 15
        })
    );
}

#[test]
fn last_hour_drop_runs_to_midnight() {
    let change = TimeChange::hour_slot(date(2024, 6, 5), 23);
    assert_eq!(change.start_time, "23:00");
    assert_eq!(change.end_time, "24:00");
}

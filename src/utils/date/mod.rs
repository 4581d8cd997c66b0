// Date utility functions

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the week containing `date`. The week anchor invariant: every
/// displayed week is identified by its Monday.
pub fn week_start_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The seven dates of the week anchored at `monday`, Monday first.
pub fn week_dates(monday: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| monday + Duration::days(i)).collect()
}

/// Header title for the displayed week: "This Week" when `today` falls
/// inside it, otherwise a short date range.
pub fn week_title(monday: NaiveDate, today: NaiveDate) -> String {
    let week_end = monday + Duration::days(6);
    if today >= monday && today <= week_end {
        "This Week".to_string()
    } else {
        format!(
            "{} - {}",
            monday.format("%b %-d"),
            week_end.format("%b %-d")
        )
    }
}

use chrono::{Duration, NaiveDate};

use crate::models::week::{DayTasks, WeekData, DAYS_PER_WEEK};
use crate::ui_egui::drag::DragSession;
use crate::utils::date::{week_dates, week_start_monday};

/// The two mutually exclusive presentations of a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Timeline,
    Grid,
}

/// Explicit client-side state, owned by the app controller and passed by
/// reference to rendering and gesture handling. The backend remains the
/// source of truth: `days` only ever holds what the last applied fetch
/// returned.
pub struct PlannerState {
    /// Monday of the displayed week.
    pub week_anchor: NaiveDate,
    /// The seven day buckets of the displayed week, Monday first.
    pub days: Vec<DayTasks>,
    pub view_mode: ViewMode,
    /// In-progress reschedule gesture, if any.
    pub drag: Option<DragSession>,
    /// Whether the latest issued fetch is still outstanding.
    pub loading: bool,
    /// Token of the most recently issued week fetch; responses carrying an
    /// older token are stale and must not be rendered.
    latest_token: u64,
}

impl PlannerState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            week_anchor: week_start_monday(today),
            days: vec![DayTasks::default(); DAYS_PER_WEEK],
            view_mode: ViewMode::Timeline,
            drag: None,
            loading: false,
            latest_token: 0,
        }
    }

    pub fn previous_week(&mut self) {
        self.week_anchor -= Duration::days(7);
    }

    pub fn next_week(&mut self) {
        self.week_anchor += Duration::days(7);
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.week_anchor = week_start_monday(today);
    }

    /// Pure view-mode flip; the held buckets are untouched and nothing is
    /// refetched.
    pub fn switch_view(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Record that a fetch with `token` is now the one whose response may
    /// be rendered.
    pub fn begin_load(&mut self, token: u64) {
        self.latest_token = token;
        self.loading = true;
    }

    /// Apply a completed fetch. Returns false, changing nothing, when the
    /// response is stale because a newer fetch has been issued since.
    pub fn apply_week(&mut self, token: u64, week: WeekData) -> bool {
        if token != self.latest_token {
            return false;
        }

        self.days = week.into_buckets();
        self.loading = false;
        true
    }

    /// Mark the latest fetch as finished without data (load failure).
    pub fn finish_load(&mut self, token: u64) {
        if token == self.latest_token {
            self.loading = false;
        }
    }

    pub fn week_dates(&self) -> Vec<NaiveDate> {
        week_dates(self.week_anchor)
    }

    pub fn task_count(&self) -> usize {
        self.days.iter().map(|day| day.tasks.len()).sum()
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }
}

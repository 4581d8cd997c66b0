use chrono::Local;

use super::PlannerApp;
use crate::services::api::worker::SyncEvent;
use crate::services::api::TimeChange;
use crate::ui_egui::views::RescheduleRequest;

impl PlannerApp {
    pub(super) fn navigate_previous(&mut self) {
        self.state.previous_week();
        self.reload_week();
    }

    pub(super) fn navigate_next(&mut self) {
        self.state.next_week();
        self.reload_week();
    }

    pub(super) fn navigate_today(&mut self) {
        self.state.go_to_today(Local::now().date_naive());
        self.reload_week();
    }

    /// Issue a fresh fetch for the displayed week. An in-flight older
    /// fetch is not cancelled; its response is discarded on arrival.
    pub(super) fn reload_week(&mut self) {
        let token = self.worker.request_week(self.state.week_anchor);
        self.state.begin_load(token);
        log::debug!(
            "Requested week {} (token {})",
            self.state.week_anchor,
            token
        );
    }

    pub(super) fn submit_reschedule(&mut self, request: RescheduleRequest) {
        let change = TimeChange::hour_slot(request.target.date, request.target.hour);
        log::info!(
            "Rescheduling task {} to {} {}",
            request.task_id,
            request.target.date,
            change.start_time
        );
        self.worker.request_reschedule(request.task_id, change);
    }

    /// Apply completed background requests. Called once per frame; stale
    /// week responses are dropped here.
    pub(super) fn poll_sync_events(&mut self, ctx: &egui::Context) {
        for event in self.worker.poll() {
            match event {
                SyncEvent::WeekLoaded {
                    token,
                    week_start,
                    result,
                } => match result {
                    Ok(week) => {
                        if self.state.apply_week(token, week) {
                            ctx.request_repaint();
                        } else {
                            log::debug!(
                                "Discarding stale week response for {} (token {})",
                                week_start,
                                token
                            );
                        }
                    }
                    Err(err) => {
                        log::error!("Failed to load week {}: {}", week_start, err);
                        self.state.finish_load(token);
                        self.toasts.error("Failed to load week");
                    }
                },
                SyncEvent::RescheduleDone {
                    task_id,
                    start_time,
                    result,
                } => match result {
                    Ok(()) => {
                        self.toasts.success(format!("Task moved to {}", start_time));
                        // The grid only ever shows acknowledged backend
                        // state: reload instead of patching locally
                        self.reload_week();
                    }
                    Err(err) => {
                        log::error!("Failed to reschedule task {}: {}", task_id, err);
                        self.toasts.error("Failed to update task time");
                    }
                },
            }
        }

        if self.state.loading {
            // Worker results arrive on a channel, not a waker; poll again
            // soon while a request is outstanding
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

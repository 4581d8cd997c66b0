use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;

use super::toast::ToastManager;
use super::{PlannerApp, PlannerState, ViewMode};
use crate::services::api::worker::SyncWorker;
use crate::services::api::ApiClient;
use crate::services::config::AppConfig;
use crate::ui_egui::theme::PlannerTheme;
use crate::ui_egui::views::{GridView, TimelineView, ViewResponse};

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        let theme = PlannerTheme::from_setting(&config.theme);
        theme.apply_to_context(&cc.egui_ctx);

        let client = ApiClient::new(
            config.backend_base(),
            Duration::from_secs(config.request_timeout_secs),
        )
        .context("Failed to build backend HTTP client")?;
        let mut worker = SyncWorker::new(client);

        let mut state = PlannerState::new(Local::now().date_naive());
        let token = worker.request_week(state.week_anchor);
        state.begin_load(token);
        log::info!("Loading initial week {}", state.week_anchor);

        Ok(Self {
            state,
            worker,
            toasts: ToastManager::new(),
            theme,
            config,
        })
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_sync_events(ctx);

        self.render_nav_bar(ctx);

        // Status bar before the central panel so it takes bottom space
        self.render_status_bar(ctx);

        let mut view_response = ViewResponse::default();
        egui::CentralPanel::default().show(ctx, |ui| {
            let dates = self.state.week_dates();
            match self.state.view_mode {
                ViewMode::Timeline => {
                    view_response = TimelineView::show(
                        ui,
                        &dates,
                        &self.state.days,
                        &mut self.state.drag,
                        &self.theme,
                    );
                }
                ViewMode::Grid => {
                    GridView::show(ui, &dates, &self.state.days, &self.theme);
                }
            }
        });

        if let Some(request) = view_response.reschedule {
            self.submit_reschedule(request);
        }

        // Keep painting while a gesture is in progress so the drop
        // indicator follows the pointer
        if self.state.drag.is_some() {
            ctx.request_repaint();
        }

        // Render toast notifications last so they appear on top
        let is_dark = self.theme.is_dark;
        self.toasts.render(ctx, is_dark);
    }
}

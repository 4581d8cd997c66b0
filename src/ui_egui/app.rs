mod lifecycle;
mod nav_bar;
mod navigation;
mod state;
mod status_bar;
mod toast;

use self::toast::ToastManager;
use crate::services::api::worker::SyncWorker;
use crate::services::config::AppConfig;
use crate::ui_egui::theme::PlannerTheme;

pub use state::{PlannerState, ViewMode};

/// The planner application: a single controller owning the explicit client
/// state, the background sync worker and the toast feedback channel.
pub struct PlannerApp {
    /// Week anchor, day buckets, view mode and drag session
    state: PlannerState,
    /// Background HTTP requests and their completion channel
    worker: SyncWorker,
    /// Transient user feedback
    toasts: ToastManager,
    /// Currently applied theme colors
    theme: PlannerTheme,
    config: AppConfig,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

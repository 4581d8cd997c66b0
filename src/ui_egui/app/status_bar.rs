//! Status bar component showing the visible week's task count and the
//! configured backend endpoint.

use egui::{Color32, RichText};

use super::PlannerApp;

/// Get theme-aware secondary text color
fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

impl PlannerApp {
    /// Render the status bar at the bottom of the window
    pub(super) fn render_status_bar(&self, ctx: &egui::Context) {
        let is_dark = self.theme.is_dark;

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let count = self.state.task_count();
                    let label = if count == 1 {
                        "1 task this week".to_string()
                    } else {
                        format!("{} tasks this week", count)
                    };
                    ui.label(
                        RichText::new(label)
                            .size(11.0)
                            .color(secondary_text_color(is_dark)),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(&self.config.backend_url)
                                .size(11.0)
                                .color(secondary_text_color(is_dark)),
                        );
                    });
                });
            });
    }
}

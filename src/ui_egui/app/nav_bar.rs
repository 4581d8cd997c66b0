use chrono::Local;
use egui::RichText;

use super::{PlannerApp, ViewMode};
use crate::utils::date::week_title;

impl PlannerApp {
    /// Render the top navigation bar: week navigation on the left, view
    /// mode toggle and refresh on the right.
    pub(super) fn render_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .button("◀")
                    .on_hover_text("Previous week")
                    .clicked()
                {
                    self.navigate_previous();
                }
                if ui.button("Today").clicked() {
                    self.navigate_today();
                }
                if ui.button("▶").on_hover_text("Next week").clicked() {
                    self.navigate_next();
                }

                ui.separator();

                let today = Local::now().date_naive();
                ui.label(
                    RichText::new(week_title(self.state.week_anchor, today))
                        .size(16.0)
                        .strong(),
                );

                if self.state.loading {
                    ui.add(egui::Spinner::new().size(14.0));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⟳").on_hover_text("Refresh").clicked() {
                        self.reload_week();
                    }

                    ui.separator();

                    // Mode switches re-render the held buckets; they never
                    // refetch
                    if ui
                        .selectable_label(self.state.view_mode == ViewMode::Grid, "Grid")
                        .clicked()
                    {
                        self.state.switch_view(ViewMode::Grid);
                    }
                    if ui
                        .selectable_label(self.state.view_mode == ViewMode::Timeline, "Timeline")
                        .clicked()
                    {
                        self.state.switch_view(ViewMode::Timeline);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }
}

//! Grid presentation: one card per day listing tasks in backend order.
//!
//! No time-axis geometry and no drag-and-drop; a pure re-render of the
//! same day buckets the timeline uses.

use chrono::{Local, NaiveDate};
use egui::{Margin, RichText, Stroke};

use super::palette::{dim_completed, priority_color, DayCardPalette};
use crate::models::task::Task;
use crate::models::week::DayTasks;
use crate::ui_egui::theme::PlannerTheme;

pub struct GridView;

impl GridView {
    pub fn show(
        ui: &mut egui::Ui,
        dates: &[NaiveDate],
        days: &[DayTasks],
        theme: &PlannerTheme,
    ) {
        let palette = DayCardPalette::from_theme(theme);
        let today = Local::now().date_naive();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |scroll_ui| {
                let count = dates.len().min(days.len());
                scroll_ui.columns(count, |columns| {
                    for (i, column) in columns.iter_mut().enumerate() {
                        Self::render_day_card(
                            column,
                            dates[i],
                            &days[i],
                            today,
                            &palette,
                            theme.is_dark,
                        );
                    }
                });
            });
    }

    fn render_day_card(
        ui: &mut egui::Ui,
        date: NaiveDate,
        day: &DayTasks,
        today: NaiveDate,
        palette: &DayCardPalette,
        is_dark: bool,
    ) {
        let is_today = date == today;

        egui::Frame::none()
            .fill(palette.card_bg)
            .rounding(egui::Rounding::same(8.0))
            .stroke(Stroke::new(
                1.0,
                if is_today {
                    palette.today_border
                } else {
                    palette.border
                },
            ))
            .inner_margin(Margin::same(6.0))
            .show(ui, |card_ui| {
                egui::Frame::none()
                    .fill(if is_today {
                        palette.today_header_bg
                    } else {
                        palette.header_bg
                    })
                    .rounding(egui::Rounding::same(4.0))
                    .inner_margin(Margin::symmetric(6.0, 4.0))
                    .show(card_ui, |header_ui| {
                        header_ui.label(
                            RichText::new(format!("{} {}", date.format("%a"), date.format("%-d")))
                                .size(12.0)
                                .color(palette.text)
                                .strong(),
                        );
                    });

                card_ui.add_space(4.0);

                if day.tasks.is_empty() {
                    card_ui.vertical_centered(|ui| {
                        ui.add_space(8.0);
                        ui.label(RichText::new("No tasks").size(11.0).color(palette.muted_text));
                        ui.add_space(8.0);
                    });
                } else {
                    for task in &day.tasks {
                        Self::render_task_entry(card_ui, task, is_dark);
                        card_ui.add_space(3.0);
                    }
                }
            });
    }

    fn render_task_entry(ui: &mut egui::Ui, task: &Task, is_dark: bool) {
        let mut fill = priority_color(task.priority, is_dark);
        if task.completed {
            fill = dim_completed(fill);
        }

        egui::Frame::none()
            .fill(fill)
            .rounding(egui::Rounding::same(4.0))
            .inner_margin(Margin::symmetric(6.0, 3.0))
            .show(ui, |entry_ui| {
                entry_ui.set_min_width(entry_ui.available_width());
                entry_ui.spacing_mut().item_spacing.y = 0.0;

                if let Some(start_time) = &task.start_time {
                    entry_ui.label(
                        RichText::new(start_time.as_str())
                            .size(9.0)
                            .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200)),
                    );
                }

                let mut title = RichText::new(&task.title)
                    .size(11.0)
                    .color(egui::Color32::WHITE);
                if task.completed {
                    title = title.strikethrough();
                }
                entry_ui.label(title);
            });
    }
}

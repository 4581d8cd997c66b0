//! Timeline presentation: 24 fixed-height hour rows by seven day columns,
//! with absolute-positioned task blocks and drag-to-reschedule.
//!
//! All geometry comes from `services::layout`; this module only paints it
//! and translates pointer gestures into `DragSession` transitions.

use chrono::{Datelike, Local, NaiveDate, Timelike, Weekday};
use egui::{Align2, Color32, CursorIcon, FontId, Margin, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use super::palette::{dim_completed, priority_color, DayCardPalette, TimeGridPalette};
use super::{format_task_tooltip, RescheduleRequest, ViewResponse};
use crate::models::task::Task;
use crate::models::week::DayTasks;
use crate::services::layout::{self, TaskBlock, HOURS_PER_DAY, HOUR_HEIGHT};
use crate::ui_egui::drag::{DragSession, DropTarget};
use crate::ui_egui::theme::PlannerTheme;

/// Width of the hour-label gutter on the left.
const TIME_LABEL_WIDTH: f32 = 50.0;
const COLUMN_SPACING: f32 = 1.0;
const HEADER_HEIGHT: f32 = 44.0;

pub struct TimelineView;

impl TimelineView {
    pub fn show(
        ui: &mut egui::Ui,
        dates: &[NaiveDate],
        days: &[DayTasks],
        drag: &mut Option<DragSession>,
        theme: &PlannerTheme,
    ) -> ViewResponse {
        let today = Local::now().date_naive();

        Self::render_header(ui, dates, today, theme);
        ui.add_space(6.0);

        let mut response = ViewResponse::default();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |scroll_ui| {
                response = Self::render_grid(scroll_ui, dates, days, drag, theme, today);
            });

        response
    }

    fn render_header(ui: &mut egui::Ui, dates: &[NaiveDate], today: NaiveDate, theme: &PlannerTheme) {
        let palette = DayCardPalette::from_theme(theme);
        let available_width = ui.available_width();
        let col_width = Self::column_width(available_width);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            // Gutter placeholder so the header lines up with the grid
            ui.allocate_ui_with_layout(
                Vec2::new(TIME_LABEL_WIDTH, HEADER_HEIGHT),
                egui::Layout::right_to_left(egui::Align::Center),
                |_ui| {},
            );
            ui.add_space(COLUMN_SPACING);

            for (i, date) in dates.iter().enumerate() {
                let is_today = *date == today;
                let cell_bg = if is_today {
                    palette.today_header_bg
                } else {
                    palette.header_bg
                };
                let border = if is_today {
                    palette.today_border
                } else {
                    palette.border
                };

                ui.allocate_ui_with_layout(
                    Vec2::new(col_width, HEADER_HEIGHT),
                    egui::Layout::top_down(egui::Align::Center),
                    |cell_ui| {
                        egui::Frame::none()
                            .fill(cell_bg)
                            .rounding(egui::Rounding::same(6.0))
                            .stroke(Stroke::new(1.0, border))
                            .inner_margin(Margin::symmetric(6.0, 4.0))
                            .show(cell_ui, |content_ui| {
                                content_ui.vertical_centered(|ui| {
                                    ui.label(
                                        RichText::new(date.format("%a").to_string())
                                            .size(12.0)
                                            .color(palette.text)
                                            .strong(),
                                    );
                                    ui.label(
                                        RichText::new(date.format("%-d %b").to_string())
                                            .size(11.0)
                                            .color(palette.muted_text),
                                    );
                                });
                            });
                    },
                );

                if i < dates.len() - 1 {
                    ui.add_space(COLUMN_SPACING);
                }
            }
        });
    }

    fn render_grid(
        ui: &mut egui::Ui,
        dates: &[NaiveDate],
        days: &[DayTasks],
        drag: &mut Option<DragSession>,
        theme: &PlannerTheme,
        today: NaiveDate,
    ) -> ViewResponse {
        let mut response = ViewResponse::default();
        let palette = TimeGridPalette::from_theme(theme);

        let available_width = ui.available_width();
        let col_width = Self::column_width(available_width);
        let desired = Vec2::new(available_width, layout::grid_height());
        let (rect, grid_response) = ui.allocate_exact_size(desired, Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        let cols_left = rect.left() + TIME_LABEL_WIDTH + COLUMN_SPACING;

        // Day column backgrounds and dividers
        for (day_idx, date) in dates.iter().enumerate() {
            let col_rect = Self::column_rect(rect, cols_left, col_width, day_idx);
            let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
            let bg = if *date == today {
                palette.today_bg
            } else if is_weekend {
                palette.weekend_bg
            } else {
                palette.regular_bg
            };
            painter.rect_filled(col_rect, 0.0, bg);
            painter.line_segment(
                [col_rect.right_top(), col_rect.right_bottom()],
                Stroke::new(1.0, palette.divider),
            );
        }

        // Hour rows and gutter labels
        for hour in 0..HOURS_PER_DAY {
            let y = rect.top() + hour as f32 * HOUR_HEIGHT;
            painter.line_segment(
                [Pos2::new(cols_left, y), Pos2::new(rect.right(), y)],
                Stroke::new(1.0, palette.hour_line),
            );
            painter.text(
                Pos2::new(rect.left() + TIME_LABEL_WIDTH - 6.0, y + 2.0),
                Align2::RIGHT_TOP,
                format!("{:02}:00", hour),
                FontId::proportional(12.0),
                palette.gutter_text,
            );
        }

        // Task blocks, tracking hitboxes for gesture handling
        let dragging_id = drag.as_ref().map(|session| session.task_id);
        let mut hitboxes: Vec<(Rect, &Task)> = Vec::new();
        for (day_idx, day) in days.iter().enumerate().take(dates.len()) {
            let x = cols_left + day_idx as f32 * (col_width + COLUMN_SPACING);
            for block in layout::layout_day(day) {
                let block_rect = Rect::from_min_size(
                    Pos2::new(x + 2.0, rect.top() + block.geometry.top + 1.0),
                    Vec2::new(col_width - 4.0, block.geometry.height - 2.0),
                );
                Self::paint_block(ui, &painter, block_rect, &block, dragging_id, theme.is_dark);
                hitboxes.push((block_rect, block.task));
            }
        }

        Self::draw_current_time_indicator(&painter, rect, dates, cols_left, col_width, &palette);

        // Gesture handling: begin over a block, hover across cells, drop
        let pointer_pos = grid_response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));

        if grid_response.drag_started() {
            if let Some(pos) = grid_response.interact_pointer_pos() {
                // Topmost block wins, matching paint order
                if let Some((_, task)) = hitboxes.iter().rev().find(|(r, _)| r.contains(pos)) {
                    *drag = Some(DragSession::begin(task));
                }
            }
        }

        if let Some(session) = drag.as_mut() {
            match pointer_pos.and_then(|pos| Self::hit_cell(rect, cols_left, col_width, dates, pos))
            {
                Some(target) => session.enter(target),
                None => session.leave(),
            }
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);

            // The single drop indicator, at the hovered cell only
            if let Some(target) = session.hovered() {
                if let Some(day_idx) = dates.iter().position(|d| *d == target.date) {
                    let x = cols_left + day_idx as f32 * (col_width + COLUMN_SPACING);
                    let cell = Rect::from_min_size(
                        Pos2::new(x, rect.top() + target.hour as f32 * HOUR_HEIGHT),
                        Vec2::new(col_width, HOUR_HEIGHT),
                    );
                    let highlight = cell.shrink2(Vec2::new(3.0, 2.0));
                    painter.rect_filled(highlight, 2.0, palette.drop_fill);
                    painter.rect_stroke(highlight, 2.0, Stroke::new(1.5, palette.drop_border));
                }
            }
        }

        if grid_response.drag_stopped() {
            // The session ends here no matter where the pointer is
            if let Some(session) = drag.take() {
                let task_id = session.task_id;
                let task_title = session.task_title.clone();
                match session.finish() {
                    Some(target) => {
                        response.reschedule = Some(RescheduleRequest { task_id, target });
                    }
                    None => {
                        log::debug!("Drag for '{}' ended outside the grid", task_title);
                    }
                }
            }
        }

        // Idle hover: tooltip and pointer cursor over blocks
        if drag.is_none() {
            if let Some(pos) = ui.input(|i| i.pointer.hover_pos()) {
                if let Some((_, task)) = hitboxes.iter().rev().find(|(r, _)| r.contains(pos)) {
                    ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                    let tooltip = format_task_tooltip(task);
                    grid_response.clone().on_hover_ui_at_pointer(|ui| {
                        ui.label(tooltip);
                    });
                }
            }
        }

        response
    }

    fn column_width(available_width: f32) -> f32 {
        ((available_width - TIME_LABEL_WIDTH - COLUMN_SPACING * 7.0) / 7.0).max(40.0)
    }

    fn column_rect(rect: Rect, cols_left: f32, col_width: f32, day_idx: usize) -> Rect {
        let x = cols_left + day_idx as f32 * (col_width + COLUMN_SPACING);
        Rect::from_min_size(
            Pos2::new(x, rect.top()),
            Vec2::new(col_width, layout::grid_height()),
        )
    }

    /// Map a pointer position to the hour cell under it, if any.
    fn hit_cell(
        rect: Rect,
        cols_left: f32,
        col_width: f32,
        dates: &[NaiveDate],
        pos: Pos2,
    ) -> Option<DropTarget> {
        if !rect.contains(pos) || pos.x < cols_left {
            return None;
        }

        let day_index = ((pos.x - cols_left) / (col_width + COLUMN_SPACING)) as usize;
        if day_index >= dates.len() {
            return None;
        }

        let hour = ((pos.y - rect.top()) / HOUR_HEIGHT) as u32;
        if hour >= HOURS_PER_DAY {
            return None;
        }

        Some(DropTarget {
            date: dates[day_index],
            hour,
        })
    }

    fn paint_block(
        ui: &egui::Ui,
        painter: &egui::Painter,
        block_rect: Rect,
        block: &TaskBlock<'_>,
        dragging_id: Option<i64>,
        is_dark: bool,
    ) {
        let task = block.task;

        let mut fill = priority_color(task.priority, is_dark);
        if task.completed {
            fill = dim_completed(fill);
        }
        if dragging_id == Some(task.id) {
            // Ghost the block being dragged
            fill = fill.linear_multiply(0.5);
        }
        painter.rect_filled(block_rect, egui::Rounding::same(4.0), fill);

        let text_color = if task.completed {
            Color32::from_rgba_unmultiplied(255, 255, 255, 180)
        } else {
            Color32::WHITE
        };

        painter.text(
            Pos2::new(block_rect.left() + 5.0, block_rect.top() + 3.0),
            Align2::LEFT_TOP,
            format!("{:02}:00", block.slot.start_hour),
            FontId::proportional(9.0),
            text_color,
        );

        let mut title = String::new();
        if task.is_important {
            title.push_str("★ ");
        }
        title.push_str(&task.title);

        let layout_job = egui::text::LayoutJob::simple(
            title,
            FontId::proportional(10.0),
            text_color,
            block_rect.width() - 10.0,
        );
        let galley = ui.fonts(|f| f.layout_job(layout_job));
        painter.galley(
            Pos2::new(block_rect.left() + 5.0, block_rect.top() + 15.0),
            galley,
            text_color,
        );
    }

    /// Draw the current time indicator line across today's column.
    fn draw_current_time_indicator(
        painter: &egui::Painter,
        rect: Rect,
        dates: &[NaiveDate],
        cols_left: f32,
        col_width: f32,
        palette: &TimeGridPalette,
    ) {
        let now = Local::now();

        if let Some(day_index) = dates.iter().position(|d| *d == now.date_naive()) {
            let hours_since_midnight =
                now.time().hour() as f32 + (now.time().minute() as f32 / 60.0);
            let y = rect.top() + hours_since_midnight * HOUR_HEIGHT;

            let x_start = cols_left + day_index as f32 * (col_width + COLUMN_SPACING);
            let x_end = x_start + col_width;

            painter.circle_filled(Pos2::new(x_start - 4.0, y), 3.0, palette.now_line);
            painter.line_segment(
                [Pos2::new(x_start, y), Pos2::new(x_end, y)],
                Stroke::new(2.0, palette.now_line),
            );
        }
    }
}

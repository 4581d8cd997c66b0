use egui::Color32;

use crate::models::task::Priority;
use crate::ui_egui::theme::PlannerTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Block fill for a task of the given priority.
pub(crate) fn priority_color(priority: Priority, is_dark: bool) -> Color32 {
    if is_dark {
        match priority {
            Priority::Low => Color32::from_rgb(50, 110, 70),
            Priority::Medium => Color32::from_rgb(140, 105, 35),
            Priority::High => Color32::from_rgb(150, 55, 55),
        }
    } else {
        match priority {
            Priority::Low => Color32::from_rgb(90, 170, 110),
            Priority::Medium => Color32::from_rgb(230, 170, 60),
            Priority::High => Color32::from_rgb(220, 95, 85),
        }
    }
}

/// Completed tasks paint dimmed, like past events.
pub(crate) fn dim_completed(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * 0.4) as u8,
        (color.g() as f32 * 0.4) as u8,
        (color.b() as f32 * 0.4) as u8,
        140,
    )
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub divider: Color32,
    pub gutter_text: Color32,
    pub drop_fill: Color32,
    pub drop_border: Color32,
    pub now_line: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &PlannerTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            hour_line: theme.grid_line,
            divider: with_alpha(theme.grid_line, 220),
            gutter_text: theme.text_secondary,
            drop_fill: Color32::from_rgba_unmultiplied(120, 200, 120, 35),
            drop_border: Color32::from_rgb(120, 200, 120),
            now_line: Color32::from_rgb(255, 100, 100),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct DayCardPalette {
    pub card_bg: Color32,
    pub header_bg: Color32,
    pub today_header_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub muted_text: Color32,
}

impl DayCardPalette {
    pub fn from_theme(theme: &PlannerTheme) -> Self {
        Self {
            card_bg: theme.surface_background,
            header_bg: blend(theme.app_background, theme.surface_background, 0.5),
            today_header_bg: theme.today_background,
            border: theme.grid_line,
            today_border: theme.today_border,
            text: theme.text_primary,
            muted_text: theme.text_secondary,
        }
    }
}

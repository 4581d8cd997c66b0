//! Theme module for the planner UI.
//!
//! Defines the PlannerTheme structure holding every color the views use,
//! and applies it to the egui visuals.

use egui::Color32;

/// A planner theme defining all colors used in the application
#[derive(Debug, Clone)]
pub struct PlannerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Grid/card surface background color
    pub surface_background: Color32,

    /// Regular day column background color
    pub day_background: Color32,

    /// Weekend day column background color
    pub weekend_background: Color32,

    /// Today's column background color
    pub today_background: Color32,

    /// Today's highlight/border color
    pub today_border: Color32,

    /// Grid and card border color
    pub grid_line: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary text color
    pub text_secondary: Color32,
}

impl PlannerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            surface_background: Color32::from_rgb(255, 255, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            grid_line: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            surface_background: Color32::from_rgb(40, 40, 40),
            day_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            grid_line: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Resolve a configured theme name. "system" and anything unrecognized
    /// follow the system preference.
    pub fn from_setting(setting: &str) -> Self {
        match setting.to_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            _ => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

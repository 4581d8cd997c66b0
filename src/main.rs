// Week Planner Application
// Main entry point

use week_planner::services::config::AppConfig;
use week_planner::ui_egui::PlannerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Week Planner");

    let config = AppConfig::load();
    log::info!("Using backend at {}", config.backend_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Week Planner",
        options,
        Box::new(move |cc| Ok(Box::new(PlannerApp::new(cc, config)?))),
    )
}

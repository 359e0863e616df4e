//! Live dashboard windows (eframe + egui_plot).

mod app;
mod plots;
mod trajectory;

use std::sync::Arc;

use eframe::egui;

use crate::config::DashboardConfig;
use crate::telemetry::TelemetryTable;

pub use app::DashboardApp;
pub use trajectory::TrajectoryWindow;

/// Open the dashboard window and block until it closes.
pub fn run(table: Arc<TelemetryTable>, config: &DashboardConfig) -> eframe::Result {
    let (w, h) = config.figure_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mission Dashboard")
            .with_inner_size([(w * 100.0) as f32, (h * 100.0) as f32]),
        ..Default::default()
    };
    let config = config.clone();
    log::info!("Opening live dashboard ({} samples)", table.len());
    eframe::run_native(
        "Mission Dashboard",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            let app = DashboardApp::new(table, &config)?;
            Ok(Box::new(app))
        }),
    )
}

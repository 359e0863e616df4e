use std::sync::Arc;

use eframe::egui;

use super::plots;
use super::trajectory::TrajectoryWindow;
use crate::config::DashboardConfig;
use crate::dashboard::{panels, DashboardController, RetainedSurface, ViewAngles};
use crate::error::RenderError;
use crate::telemetry::{TelemetrySummary, TelemetryTable};

/// Main window: tab bar over the active tab's panels.
pub struct DashboardApp {
    controller: DashboardController<RetainedSurface>,
    summary: TelemetrySummary,
    view: ViewAngles,
    trajectory: TrajectoryWindow,
}

impl DashboardApp {
    pub fn new(table: Arc<TelemetryTable>, config: &DashboardConfig) -> Result<Self, RenderError> {
        let opts = config.layout_options();
        let summary = TelemetrySummary::from_table(&table);
        let trajectory = TrajectoryWindow::new(panels::trajectory(&table, &opts), config.view);
        let controller = DashboardController::open(table, RetainedSurface::new(), opts)?;
        Ok(Self { controller, summary, view: config.view, trajectory })
    }

    pub fn controller(&self) -> &DashboardController<RetainedSurface> {
        &self.controller
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut clicked = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Mission Dashboard");
            ui.label(self.summary.headline());
            ui.horizontal(|ui| {
                let active = self.controller.active();
                for control in self.controller.surface().controls() {
                    if ui.selectable_label(control.target == active, control.label).clicked() {
                        clicked = Some(control.id);
                    }
                }
                ui.separator();
                ui.checkbox(&mut self.trajectory.open, "3D trajectory window");
            });
        });

        // Controls are replaced on redraw, so dispatch after the bar is done with them.
        if let Some(id) = clicked {
            if let Err(e) = self.controller.activate(id) {
                log::error!("Failed to redraw dashboard: {e}");
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.controller.surface().layout() {
            Some(layout) => plots::show_layout(ui, layout, &mut self.view),
            None => {
                ui.label("Nothing to draw");
            }
        });

        self.trajectory.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Tab;
    use crate::telemetry::table::fixtures;

    #[test]
    fn app_opens_on_orbit_beside_trajectory_window() {
        let config = DashboardConfig::default();
        let app = DashboardApp::new(Arc::new(fixtures::circular_orbit(50)), &config).unwrap();
        assert_eq!(app.controller().active(), Tab::Orbit);
        assert_eq!(app.controller().surface().controls().len(), 3);
        assert!(app.trajectory.open);
    }
}

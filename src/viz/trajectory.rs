use eframe::egui;

use super::plots;
use crate::dashboard::layout::Trajectory;
use crate::dashboard::ViewAngles;

const VIEWPORT: &str = "trajectory_3d";

/// Separate rotatable view of the inertial trajectory. Opens with the
/// dashboard; closing it leaves the main window running.
pub struct TrajectoryWindow {
    pub open: bool,
    trajectory: Trajectory,
    view: ViewAngles,
}

impl TrajectoryWindow {
    pub fn new(trajectory: Trajectory, view: ViewAngles) -> Self {
        Self { open: true, trajectory, view }
    }

    pub fn view(&self) -> ViewAngles {
        self.view
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let mut close = false;
        let Self { trajectory, view, .. } = self;
        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of(VIEWPORT),
            egui::ViewportBuilder::default()
                .with_title("Interactive Orbital Trajectory")
                .with_inner_size([800.0, 800.0]),
            |ctx, _class| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(egui::Slider::new(&mut view.elevation_deg, -90.0..=90.0).text("Elevation [deg]"));
                        ui.add(egui::Slider::new(&mut view.azimuth_deg, -180.0..=180.0).text("Azimuth [deg]"));
                        if ui.button("Reset").clicked() {
                            *view = ViewAngles::default();
                        }
                    });
                    let size = ui.available_size();
                    plots::show_trajectory(ui, VIEWPORT, trajectory, view, size.x, size.y, true);
                });
                if ctx.input(|i| i.viewport().close_requested()) {
                    close = true;
                }
            },
        );

        if close {
            self.open = false;
        }
    }
}

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::dashboard::ground_track;
use crate::dashboard::layout::{AxisScale, Chart, GroundTrack, Layout, Panel, PanelKind, Trajectory};
use crate::dashboard::ViewAngles;
use crate::theme::{self, Rgb};

// Drag sensitivity, degrees per point.
const DRAG_DEG_PER_PT: f64 = 0.4;

pub fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}

/// Paint the 2×2 grid of `layout` into the remaining space of `ui`.
pub fn show_layout(ui: &mut egui::Ui, layout: &Layout, view: &mut ViewAngles) {
    let available = ui.available_size();
    let top_h = available.y * layout.row_fraction(0) as f32 - 8.0;
    let bottom_h = available.y - top_h - 16.0;

    for (row, height) in [(0, top_h), (1, bottom_h)] {
        ui.horizontal(|ui| {
            for panel in layout.row(row) {
                let width = available.x * panel.cell.col_span as f32 / Layout::COLS as f32 - 8.0;
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(panel.title).strong());
                    show_panel(ui, layout, panel, width, height - 24.0, view);
                });
            }
        });
    }
}

fn show_panel(
    ui: &mut egui::Ui,
    layout: &Layout,
    panel: &Panel,
    width: f32,
    height: f32,
    view: &mut ViewAngles,
) {
    let id = (layout.tab, panel.title);
    match &panel.kind {
        PanelKind::Chart(chart) => show_chart(ui, id, chart, width, height),
        PanelKind::GroundTrack(track) => show_ground_track(ui, id, track, width, height),
        PanelKind::Trajectory(traj) => show_trajectory(ui, id, traj, view, width, height, true),
    }
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

fn show_chart(ui: &mut egui::Ui, id: impl std::hash::Hash, chart: &Chart, width: f32, height: f32) {
    let log = chart.y_scale == AxisScale::Log;

    let mut plot = Plot::new(id)
        .width(width)
        .height(height)
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label);
    if chart.legend {
        plot = plot.legend(Legend::default());
    }
    if log {
        plot = plot.y_axis_formatter(|mark, _range| decade_label(mark.value));
    }

    plot.show(ui, |plot_ui| {
        for s in &chart.series {
            let points: PlotPoints = s
                .points
                .iter()
                .map(|&[x, y]| if log { [x, y.log10()] } else { [x, y] })
                .collect();
            plot_ui.line(Line::new(s.name.clone(), points).color(color(s.color)));
        }
    });
}

/// Tick label for a log10-plotted axis. Only whole decades are labelled.
fn decade_label(exponent: f64) -> String {
    let decade = exponent.round() + 0.0; // no "-0"
    if (exponent - decade).abs() < 1e-6 {
        format!("1e{decade:.0}")
    } else {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// Ground track
// ---------------------------------------------------------------------------

fn show_ground_track(ui: &mut egui::Ui, id: impl std::hash::Hash, track: &GroundTrack, width: f32, height: f32) {
    Plot::new(id)
        .width(width)
        .height(height - 20.0)
        .data_aspect(1.0)
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-90.0)
        .include_y(90.0)
        .x_axis_label("Longitude [deg]")
        .y_axis_label("Latitude [deg]")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for segment in &track.segments {
                for run in segment.color_runs(track.time_span, ground_track::COLOR_LEVELS) {
                    // Unnamed lines stay out of the legend.
                    plot_ui.line(
                        Line::new("", PlotPoints::from(run.points))
                            .color(color(theme::plasma(run.level)))
                            .width(2.0),
                    );
                }
            }
            for m in &track.markers {
                plot_ui.points(
                    Points::new(m.name, vec![m.at])
                        .color(color(m.color))
                        .radius(5.0)
                        .filled(true),
                );
            }
        });

    let (t0, t1) = track.time_span;
    ui.horizontal(|ui| {
        ui.label("Time [hours]");
        ui.colored_label(color(theme::plasma(0.0)), format!("{:.2}", t0 / 3600.0));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(160.0, 10.0), egui::Sense::hover());
        let steps = 32;
        let step_w = rect.width() / steps as f32;
        for i in 0..steps {
            let x = rect.left() + i as f32 * step_w;
            let cell = egui::Rect::from_min_size(egui::pos2(x, rect.top()), egui::vec2(step_w + 0.5, rect.height()));
            let c = theme::plasma((i as f64 + 0.5) / steps as f64);
            ui.painter().rect_filled(cell, 0.0, color(c));
        }
        ui.colored_label(color(theme::plasma(1.0)), format!("{:.2}", t1 / 3600.0));
    });
}

// ---------------------------------------------------------------------------
// 3D trajectory
// ---------------------------------------------------------------------------

/// Orthographic view of `traj` along `view`. Dragging rotates when `interactive`.
pub fn show_trajectory(
    ui: &mut egui::Ui,
    id: impl std::hash::Hash,
    traj: &Trajectory,
    view: &mut ViewAngles,
    width: f32,
    height: f32,
    interactive: bool,
) {
    let e = traj.extent();
    let axes = [
        ("X [km]", nalgebra::Vector3::new(e, 0.0, 0.0)),
        ("Y [km]", nalgebra::Vector3::new(0.0, e, 0.0)),
        ("Z [km]", nalgebra::Vector3::new(0.0, 0.0, e)),
    ];
    let trace = view.project_all(&traj.points);

    let response = Plot::new(id)
        .width(width)
        .height(height)
        .data_aspect(1.0)
        .include_x(-e)
        .include_x(e)
        .include_y(-e)
        .include_y(e)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (label, tip) in &axes {
                let end = view.project(tip);
                plot_ui.line(Line::new("", vec![[0.0, 0.0], end]).color(color(theme::AXES_EDGE)));
                plot_ui.text(
                    Text::new(*label, PlotPoint::new(end[0], end[1]), *label).color(color(theme::TEXT)),
                );
            }
            plot_ui.line(Line::new("Trajectory", trace).color(color(traj.color)).width(1.5));
        });

    if interactive && response.response.dragged() {
        let d = response.response.drag_delta();
        view.rotate_by(-(d.x as f64) * DRAG_DEG_PER_PT, d.y as f64 * DRAG_DEG_PER_PT);
    }
}

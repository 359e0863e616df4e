use super::ground_track;
use super::layout::{
    decimate_indices, AxisScale, Cell, Chart, GroundTrack, Layout, LayoutOptions, Marker, Panel,
    PanelKind, Series, Trajectory,
};
use super::tab::Tab;
use crate::telemetry::{Sample, TelemetryTable};
use crate::theme::{self, Rgb};

/// Build the layout `tab` draws for `table`.
pub fn layout_for(tab: Tab, table: &TelemetryTable, opts: &LayoutOptions) -> Layout {
    match tab {
        Tab::Orbit => orbit(table, opts),
        Tab::Attitude => attitude(table, opts),
        Tab::Controls => controls(table, opts),
    }
}

// ---------------------------------------------------------------------------
// Orbit: ground track over trajectory + altitude
// ---------------------------------------------------------------------------

fn orbit(table: &TelemetryTable, opts: &LayoutOptions) -> Layout {
    let samples = table.samples();

    // Segment on full-rate data; a stride could hide a wrap.
    let full = ground_track::segments(samples);
    let per_segment = match opts.max_points {
        0 | 1 => 0,
        max => (max / full.len().max(1)).max(2),
    };
    let segments = full.iter().map(|s| s.decimated(per_segment)).collect();

    let mut markers = Vec::new();
    if let (Some(first), Some(last)) = (table.first(), table.last()) {
        markers.push(Marker { name: "Start", color: theme::START, at: [first.lon, first.lat] });
        markers.push(Marker { name: "End", color: theme::END, at: [last.lon, last.lat] });
    }
    markers.retain(|m| m.at.iter().all(|v| v.is_finite()));

    let track = GroundTrack {
        segments,
        time_span: table.time_span().unwrap_or((0.0, 0.0)),
        markers,
    };

    let trajectory = trajectory(table, opts);

    let altitude = Chart {
        x_label: "Time [hours]",
        y_label: "Altitude [km]",
        y_scale: AxisScale::Linear,
        legend: false,
        series: vec![series(samples, opts, "Altitude", theme::palette(0), |s| [s.hours(), s.alt])],
    };

    Layout {
        tab: Tab::Orbit,
        row_weights: [1.5, 1.0],
        panels: vec![
            Panel { title: "Ground Track", cell: Cell::full_row(0), kind: PanelKind::GroundTrack(track) },
            Panel { title: "Orbital Trajectory", cell: Cell::at(1, 0), kind: PanelKind::Trajectory(trajectory) },
            Panel { title: "Orbital Altitudes", cell: Cell::at(1, 1), kind: PanelKind::Chart(altitude) },
        ],
    }
}

/// Decimated inertial position trace.
pub fn trajectory(table: &TelemetryTable, opts: &LayoutOptions) -> Trajectory {
    Trajectory {
        points: thin(table.samples(), opts)
            .map(|s| s.pos)
            .filter(|p| p.iter().all(|v| v.is_finite()))
            .collect(),
        color: theme::palette(0),
    }
}

// ---------------------------------------------------------------------------
// Attitude: quaternion over body rates + conservation error
// ---------------------------------------------------------------------------

fn attitude(table: &TelemetryTable, opts: &LayoutOptions) -> Layout {
    let samples = table.samples();

    let quaternion = Chart {
        x_label: "Time [s]",
        y_label: "Component Value",
        y_scale: AxisScale::Linear,
        legend: true,
        series: vec![
            series(samples, opts, "w (scalar)", theme::palette(0), |s| [s.time, s.quat.w]),
            series(samples, opts, "x", theme::palette(1), |s| [s.time, s.quat.i]),
            series(samples, opts, "y", theme::palette(2), |s| [s.time, s.quat.j]),
            series(samples, opts, "z", theme::palette(3), |s| [s.time, s.quat.k]),
        ],
    };

    let rates = Chart {
        x_label: "Time [s]",
        y_label: "Angular Rate [deg/s]",
        y_scale: AxisScale::Linear,
        legend: true,
        series: vec![
            series(samples, opts, "X", theme::palette(0), |s| [s.time, s.omega.x.to_degrees()]),
            series(samples, opts, "Y", theme::palette(1), |s| [s.time, s.omega.y.to_degrees()]),
            series(samples, opts, "Z", theme::palette(2), |s| [s.time, s.omega.z.to_degrees()]),
        ],
    };

    let errors = Chart {
        x_label: "Time [s]",
        y_label: "Error",
        y_scale: AxisScale::Linear,
        legend: true,
        series: vec![
            series(samples, opts, "Energy Error", theme::END, |s| [s.time, s.energy_error]),
            series(samples, opts, "Angular Momentum Error", theme::palette(0), |s| {
                [s.time, s.momentum_error]
            }),
        ],
    };

    Layout {
        tab: Tab::Attitude,
        row_weights: [1.0, 1.0],
        panels: vec![
            Panel { title: "GCRS to Body Quaternion", cell: Cell::full_row(0), kind: PanelKind::Chart(quaternion) },
            Panel { title: "Body Angular Velocity", cell: Cell::at(1, 0), kind: PanelKind::Chart(rates) },
            Panel {
                title: "Energy and Angular Momentum Conservation Error",
                cell: Cell::at(1, 1),
                kind: PanelKind::Chart(errors),
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Controls: torque, thrust, and log-scale conservation error
// ---------------------------------------------------------------------------

fn controls(table: &TelemetryTable, opts: &LayoutOptions) -> Layout {
    let samples = table.samples();

    let torque = Chart {
        x_label: "Time [hours]",
        y_label: "Torque [N⋅m]",
        y_scale: AxisScale::Linear,
        legend: true,
        series: vec![
            series(samples, opts, "X", theme::palette(0), |s| [s.hours(), s.torque.x]),
            series(samples, opts, "Y", theme::palette(1), |s| [s.hours(), s.torque.y]),
            series(samples, opts, "Z", theme::palette(2), |s| [s.hours(), s.torque.z]),
        ],
    };

    let thrust = Chart {
        x_label: "Time [hours]",
        y_label: "Thrust [N]",
        y_scale: AxisScale::Linear,
        legend: true,
        series: vec![
            series(samples, opts, "X", theme::palette(0), |s| [s.hours(), s.thrust.x]),
            series(samples, opts, "Y", theme::palette(1), |s| [s.hours(), s.thrust.y]),
            series(samples, opts, "Z", theme::palette(2), |s| [s.hours(), s.thrust.z]),
        ],
    };

    let energy = Chart {
        x_label: "Time [hours]",
        y_label: "Relative Error",
        y_scale: AxisScale::Log,
        legend: false,
        series: vec![log_series(series(samples, opts, "Energy Error", theme::palette(0), |s| {
            [s.hours(), s.energy_error]
        }))],
    };

    let momentum = Chart {
        x_label: "Time [hours]",
        y_label: "Relative Error",
        y_scale: AxisScale::Log,
        legend: false,
        series: vec![log_series(series(samples, opts, "Angular Momentum Error", theme::palette(0), |s| {
            [s.hours(), s.momentum_error]
        }))],
    };

    Layout {
        tab: Tab::Controls,
        row_weights: [1.0, 1.0],
        panels: vec![
            Panel { title: "Control Torques", cell: Cell::at(0, 0), kind: PanelKind::Chart(torque) },
            Panel { title: "Thrust Forces", cell: Cell::at(0, 1), kind: PanelKind::Chart(thrust) },
            Panel { title: "Energy Conservation Error", cell: Cell::at(1, 0), kind: PanelKind::Chart(energy) },
            Panel {
                title: "Angular Momentum Conservation Error",
                cell: Cell::at(1, 1),
                kind: PanelKind::Chart(momentum),
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn thin<'a>(samples: &'a [Sample], opts: &LayoutOptions) -> impl Iterator<Item = &'a Sample> + 'a {
    decimate_indices(samples.len(), opts.max_points)
        .into_iter()
        .map(move |i| &samples[i])
}

fn series(
    samples: &[Sample],
    opts: &LayoutOptions,
    name: &str,
    color: Rgb,
    f: impl Fn(&Sample) -> [f64; 2],
) -> Series {
    Series {
        name: name.to_string(),
        color,
        points: thin(samples, opts)
            .map(f)
            .filter(|p| p[0].is_finite() && p[1].is_finite())
            .collect(),
    }
}

/// Drop points a log axis cannot show.
fn log_series(mut s: Series) -> Series {
    s.points.retain(|p| p[1] > 0.0 && p[1].is_finite());
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::table::fixtures;

    fn charts(layout: &Layout) -> Vec<&Chart> {
        layout
            .panels
            .iter()
            .filter_map(|p| match &p.kind {
                PanelKind::Chart(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn every_tab_fills_the_grid() {
        let table = fixtures::circular_orbit(50);
        for tab in Tab::ALL {
            let layout = layout_for(tab, &table, &LayoutOptions::default());
            assert_eq!(layout.tab, tab);
            for row in 0..Layout::ROWS {
                let span: usize = layout.row(row).iter().map(|p| p.cell.col_span).sum();
                assert_eq!(span, Layout::COLS, "{tab} row {row} not filled");
            }
        }
    }

    #[test]
    fn orbit_has_track_trajectory_and_altitude() {
        let table = fixtures::circular_orbit(300);
        let layout = layout_for(Tab::Orbit, &table, &LayoutOptions::default());
        assert_eq!(layout.row_weights, [1.5, 1.0]);

        let PanelKind::GroundTrack(track) = &layout.row(0)[0].kind else {
            panic!("top row should be the ground track");
        };
        assert!(track.segments.len() > 1);
        assert_eq!(track.markers[0].name, "Start");
        assert_eq!(track.markers[0].at, [table.samples()[0].lon, table.samples()[0].lat]);
        assert_eq!(track.markers[1].at[0], table.samples()[299].lon);

        assert!(matches!(layout.row(1)[0].kind, PanelKind::Trajectory(_)));
        let alt = charts(&layout)[0];
        // 3600 s sample at index 60 → 1 hour.
        assert!((alt.series[0].points[60][0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn attitude_rates_are_in_degrees() {
        let table = fixtures::circular_orbit(10);
        let layout = layout_for(Tab::Attitude, &table, &LayoutOptions::default());
        let c = charts(&layout);
        assert_eq!(c[0].series.len(), 4);
        assert_eq!(c[0].series[0].name, "w (scalar)");
        let x = c[1].series[0].points[0][1];
        assert!((x - 0.01_f64.to_degrees()).abs() < 1e-12);
        assert_eq!(c[1].x_label, "Time [s]");
    }

    #[test]
    fn controls_errors_on_log_axes_without_zeros() {
        let table = fixtures::circular_orbit(20);
        let layout = layout_for(Tab::Controls, &table, &LayoutOptions::default());
        let c = charts(&layout);
        assert_eq!(c.len(), 4);
        assert_eq!(c[0].y_scale, AxisScale::Linear);
        assert_eq!(c[1].y_scale, AxisScale::Linear);
        for log_chart in &c[2..] {
            assert_eq!(log_chart.y_scale, AxisScale::Log);
            // Fixture error is 0 at t = 0; it must be masked.
            assert_eq!(log_chart.series[0].points.len(), 19);
            assert!(log_chart.series[0].points.iter().all(|p| p[1] > 0.0));
        }
    }

    #[test]
    fn blank_values_are_left_out_of_drawn_lines() {
        let mut samples = fixtures::circular_orbit(10).samples().to_vec();
        samples[0].lat = f64::NAN;
        samples[3].alt = f64::NAN;
        samples[5].pos.x = f64::NAN;
        let table = TelemetryTable::from_samples(samples);

        let layout = layout_for(Tab::Orbit, &table, &LayoutOptions::default());
        let PanelKind::GroundTrack(track) = &layout.panels[0].kind else { unreachable!() };
        assert_eq!(track.markers.len(), 1);
        assert_eq!(track.markers[0].name, "End");
        let PanelKind::Trajectory(traj) = &layout.panels[1].kind else { unreachable!() };
        assert_eq!(traj.points.len(), 9);
        let alt = charts(&layout)[0];
        assert_eq!(alt.series[0].points.len(), 9);
    }

    #[test]
    fn long_tables_are_decimated() {
        let table = fixtures::circular_orbit(5000);
        let opts = LayoutOptions { max_points: 500 };
        let layout = layout_for(Tab::Attitude, &table, &opts);
        for chart in charts(&layout) {
            for s in &chart.series {
                assert!(s.points.len() <= 500);
            }
        }
        let orbit = layout_for(Tab::Orbit, &table, &opts);
        let PanelKind::GroundTrack(track) = &orbit.panels[0].kind else { unreachable!() };
        let total: usize = track.segments.iter().map(|s| s.points.len()).sum();
        assert!(total <= 500 + 2 * track.segments.len());
    }

    #[test]
    fn empty_table_builds_empty_panels() {
        let table = TelemetryTable::default();
        for tab in Tab::ALL {
            let layout = layout_for(tab, &table, &LayoutOptions::default());
            assert!(charts(&layout).iter().all(|c| c.series.iter().all(|s| s.points.is_empty())));
        }
        let orbit = layout_for(Tab::Orbit, &table, &LayoutOptions::default());
        let PanelKind::GroundTrack(track) = &orbit.panels[0].kind else { unreachable!() };
        assert!(track.markers.is_empty());
        assert!(track.segments.is_empty());
    }
}

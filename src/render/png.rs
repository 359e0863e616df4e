use std::path::{Path, PathBuf};

use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{fonts, rgb};
use crate::dashboard::layout::{AxisScale, Chart, GroundTrack, Layout, Panel, PanelKind, Trajectory};
use crate::dashboard::{ground_track, DrawingSurface, NavControl, ViewAngles};
use crate::error::RenderError;
use crate::theme;

/// Surface that renders each presented frame to a PNG file.
///
/// The file is rewritten in place on every `present`.
#[derive(Debug)]
pub struct PngSurface {
    path: PathBuf,
    size: (u32, u32),
    scale: f64, // pixels per typographic point
    view: ViewAngles,
    layout: Option<Layout>,
    controls: Vec<NavControl>,
}

impl PngSurface {
    pub fn new(path: impl Into<PathBuf>, size: (u32, u32), dpi: u32, view: ViewAngles) -> Self {
        Self {
            path: path.into(),
            size,
            scale: dpi as f64 / 72.0,
            view,
            layout: None,
            controls: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn px(&self, points: f64) -> u32 {
        (points * self.scale).round().max(1.0) as u32
    }

    fn font(&self, points: f64) -> TextStyle<'static> {
        ("sans-serif", points * self.scale).into_font().color(&rgb(theme::TEXT))
    }

    fn render(&self) -> Result<(), RenderError> {
        let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&rgb(theme::FIGURE_BG))?;

        let header_h = (self.size.1 as f64 * 0.07).round() as u32;
        let (header, body) = root.split_vertically(header_h);
        self.draw_controls(&header)?;

        if let Some(layout) = &self.layout {
            let body_h = body.dim_in_pixel().1 as f64;
            let top_h = (body_h * layout.row_fraction(0)).round() as u32;
            let (top, bottom) = body.split_vertically(top_h);
            for (row, area) in [(0, top), (1, bottom)] {
                let panels = layout.row(row);
                match panels.as_slice() {
                    [single] if single.cell.col_span == Layout::COLS => self.draw_panel(&area, single)?,
                    _ => {
                        let cols = area.split_evenly((1, Layout::COLS));
                        for panel in panels {
                            self.draw_panel(&cols[panel.cell.col], panel)?;
                        }
                    }
                }
            }
        }

        root.present()?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Navigation bar
    // -----------------------------------------------------------------------

    fn draw_controls<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        let (w, h) = area.dim_in_pixel();
        let (w, h) = (w as f64, h as f64);
        let active = self.layout.as_ref().map(|l| l.tab);
        let label_style = self.font(9.0).pos(Pos::new(HPos::Center, VPos::Center));

        for (i, control) in self.controls.iter().enumerate() {
            let x0 = w * (0.35 + i as f64 * 0.12);
            let x1 = x0 + w * 0.10;
            let (y0, y1) = (h * 0.25, h * 0.85);
            let fill = if Some(control.target) == active { theme::BUTTON_ACTIVE } else { theme::BUTTON };

            let corners = [(x0 as i32, y0 as i32), (x1 as i32, y1 as i32)];
            area.draw(&Rectangle::new(corners, rgb(fill).filled()))?;
            area.draw(&Rectangle::new(corners, rgb(theme::AXES_EDGE).stroke_width(self.px(0.5))))?;
            let center = (((x0 + x1) / 2.0) as i32, ((y0 + y1) / 2.0) as i32);
            area.draw(&Text::new(control.label.to_string(), center, label_style.clone()))?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Panels
    // -----------------------------------------------------------------------

    fn draw_panel<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>, panel: &Panel) -> Result<(), RenderError> {
        match &panel.kind {
            PanelKind::Chart(chart) => self.draw_chart(area, panel.title, chart),
            PanelKind::GroundTrack(track) => self.draw_ground_track(area, panel.title, track),
            PanelKind::Trajectory(traj) => self.draw_trajectory(area, panel.title, traj),
        }
    }

    fn draw_chart<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        chart: &Chart,
    ) -> Result<(), RenderError> {
        let ([x0, y0], [x1, y1]) = chart.bounds().unwrap_or(([0.0, 0.0], [1.0, 1.0]));
        let x_range = padded(x0, x1);

        let mut builder = ChartBuilder::on(area);
        builder
            .caption(title, self.font(12.0))
            .margin(self.px(8.0))
            .x_label_area_size(self.px(28.0))
            .y_label_area_size(self.px(48.0));

        match chart.y_scale {
            AxisScale::Linear => {
                let (lo, hi) = padded(y0, y1);
                let ctx = builder.build_cartesian_2d(x_range.0..x_range.1, lo..hi)?;
                self.fill_chart(ctx, chart)
            }
            AxisScale::Log => {
                let (lo, hi) = log_range(chart);
                let ctx = builder.build_cartesian_2d(x_range.0..x_range.1, (lo..hi).log_scale())?;
                self.fill_chart(ctx, chart)
            }
        }
    }

    fn fill_chart<'a, DB, Y>(
        &self,
        mut ctx: ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
        chart: &Chart,
    ) -> Result<(), RenderError>
    where
        DB: DrawingBackend + 'a,
        Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        ctx.plotting_area().fill(&rgb(theme::AXES_BG))?;

        let exponent = |v: &f64| format!("{v:.0e}");
        {
            let mut mesh = ctx.configure_mesh();
            mesh.x_desc(chart.x_label)
                .y_desc(chart.y_label)
                .axis_style(rgb(theme::AXES_EDGE))
                .bold_line_style(rgb(theme::GRID))
                .light_line_style(TRANSPARENT)
                .label_style(self.font(8.0))
                .axis_desc_style(self.font(9.0));
            if chart.y_scale == AxisScale::Log {
                mesh.y_label_formatter(&exponent);
            }
            mesh.draw()?;
        }

        let width = self.px(1.5);
        let swatch = self.px(14.0) as i32;
        for s in &chart.series {
            let style = rgb(s.color).stroke_width(width);
            let anno = ctx.draw_series(LineSeries::new(s.points.iter().map(|p| (p[0], p[1])), style))?;
            if chart.legend {
                anno.label(s.name.clone())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + swatch, y)], style));
            }
        }

        if chart.legend && !chart.series.is_empty() {
            ctx.configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(rgb(theme::AXES_BG))
                .border_style(rgb(theme::AXES_EDGE))
                .label_font(self.font(8.0))
                .draw()?;
        }
        Ok(())
    }

    fn draw_ground_track<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        track: &GroundTrack,
    ) -> Result<(), RenderError> {
        let area_h = area.dim_in_pixel().1;
        let bar_h = self.px(34.0).min(area_h / 4);
        let (map_area, bar_area) = area.split_vertically(area_h - bar_h);

        let mut ctx = ChartBuilder::on(&map_area)
            .caption(title, self.font(12.0))
            .margin(self.px(8.0))
            .build_cartesian_2d(-180.0..180.0, -90.0..90.0)?;
        ctx.plotting_area().fill(&rgb(theme::FIGURE_BG))?;

        // Plate carrée graticule: 60° meridians, 30° parallels.
        let grid = rgb(theme::GRID).stroke_width(self.px(0.5));
        let tick = self.font(7.0);
        for lon in (-180..=180).step_by(60).map(f64::from) {
            ctx.draw_series(std::iter::once(PathElement::new(vec![(lon, -90.0), (lon, 90.0)], grid)))?;
            let style = tick.pos(Pos::new(HPos::Center, VPos::Bottom));
            ctx.draw_series(std::iter::once(Text::new(lon_label(lon), (lon, -88.0), style)))?;
        }
        for lat in (-90..=90).step_by(30).map(f64::from) {
            ctx.draw_series(std::iter::once(PathElement::new(vec![(-180.0, lat), (180.0, lat)], grid)))?;
            let style = tick.pos(Pos::new(HPos::Left, VPos::Center));
            ctx.draw_series(std::iter::once(Text::new(lat_label(lat), (-178.0, lat), style)))?;
        }

        let width = self.px(1.5);
        for segment in &track.segments {
            for run in segment.color_runs(track.time_span, ground_track::COLOR_LEVELS) {
                let style = rgb(theme::plasma(run.level)).stroke_width(width);
                let path: Vec<(f64, f64)> = run.points.iter().map(|p| (p[0], p[1])).collect();
                ctx.draw_series(std::iter::once(PathElement::new(path, style)))?;
            }
        }

        let radius = self.px(4.0);
        for marker in &track.markers {
            let fill = rgb(marker.color).filled();
            ctx.draw_series(std::iter::once(Circle::new((marker.at[0], marker.at[1]), radius, fill)))?
                .label(marker.name)
                .legend(move |(x, y)| Circle::new((x, y), radius, fill));
        }
        if !track.markers.is_empty() {
            ctx.configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(rgb(theme::AXES_BG))
                .border_style(rgb(theme::AXES_EDGE))
                .label_font(self.font(8.0))
                .draw()?;
        }

        self.draw_time_scale(&bar_area, track.time_span)
    }

    /// Horizontal elapsed-time color scale in hours.
    fn draw_time_scale<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        span: (f64, f64),
    ) -> Result<(), RenderError> {
        let (w, h) = area.dim_in_pixel();
        let (w, h) = (w as f64, h as f64);
        let (x0, x1) = (w * 0.25, w * 0.75);
        let (y0, y1) = (0.0, h * 0.35);

        let steps = 128;
        for i in 0..steps {
            let a = x0 + (x1 - x0) * i as f64 / steps as f64;
            let b = x0 + (x1 - x0) * (i + 1) as f64 / steps as f64;
            let color = theme::plasma((i as f64 + 0.5) / steps as f64);
            area.draw(&Rectangle::new([(a as i32, y0 as i32), (b.ceil() as i32, y1 as i32)], rgb(color).filled()))?;
        }

        let label = self.font(7.0);
        let (t0, t1) = span;
        for (x, t) in [(x0, t0), ((x0 + x1) / 2.0, (t0 + t1) / 2.0), (x1, t1)] {
            let style = label.pos(Pos::new(HPos::Center, VPos::Top));
            area.draw(&Text::new(format!("{:.1}", t / 3600.0), (x as i32, y1 as i32 + 2), style))?;
        }
        let style = label.pos(Pos::new(HPos::Left, VPos::Center));
        area.draw(&Text::new(
            "Mission Elapsed Time [hours]".to_string(),
            (x1 as i32 + self.px(8.0) as i32, (y1 / 2.0) as i32),
            style,
        ))?;
        Ok(())
    }

    fn draw_trajectory<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        traj: &Trajectory,
    ) -> Result<(), RenderError> {
        let e = traj.extent();
        let mut ctx = ChartBuilder::on(area)
            .caption(title, self.font(12.0))
            .margin(self.px(8.0))
            .build_cartesian_3d(-e..e, -e..e, -e..e)?;

        // plotters' vertical axis is Y; telemetry Z goes there.
        let (yaw, pitch) = (self.view.azimuth_deg.to_radians(), self.view.elevation_deg.to_radians());
        ctx.with_projection(|mut pb| {
            pb.yaw = yaw;
            pb.pitch = pitch;
            pb.scale = 0.8;
            pb.into_matrix()
        });

        ctx.configure_axes()
            .light_grid_style(rgb(theme::GRID))
            .bold_grid_style(rgb(theme::AXES_EDGE))
            .axis_panel_style(rgb(theme::AXES_BG).mix(0.6))
            .label_style(self.font(7.0))
            .max_light_lines(2)
            .draw()?;

        let style = rgb(traj.color).stroke_width(self.px(1.0));
        ctx.draw_series(LineSeries::new(traj.points.iter().map(|p| (p.x, p.z, p.y)), style))?;
        Ok(())
    }
}

impl DrawingSurface for PngSurface {
    fn clear(&mut self) {
        self.layout = None;
        self.controls.clear();
    }

    fn draw(&mut self, layout: Layout) {
        self.layout = Some(layout);
    }

    fn attach_controls(&mut self, controls: &[NavControl]) {
        self.controls.extend_from_slice(controls);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        fonts::ensure_registered()?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        self.render()?;
        log::debug!("Wrote {:?}", self.path);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Range with 5% headroom. Flat data gets a small symmetric band.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let margin = (hi - lo) * 0.05;
    if margin > 0.0 {
        (lo - margin, hi + margin)
    } else {
        let band = lo.abs().max(1.0) * 0.05;
        (lo - band, hi + band)
    }
}

/// Whole decades covering the positive data; (1e-16, 1) when there is none.
fn log_range(chart: &Chart) -> (f64, f64) {
    let (lo, hi) = chart
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p[1]))
        .filter(|v| *v > 0.0 && v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() {
        return (1e-16, 1.0);
    }
    let lo = 10f64.powf(lo.log10().floor());
    let hi = 10f64.powf(hi.log10().ceil());
    if hi > lo { (lo, hi) } else { (lo, lo * 10.0) }
}

fn lon_label(lon: f64) -> String {
    match lon {
        l if l < 0.0 => format!("{:.0}°W", -l),
        l if l > 0.0 && l < 180.0 => format!("{:.0}°E", l),
        l => format!("{:.0}°", l.abs()),
    }
}

fn lat_label(lat: f64) -> String {
    match lat {
        l if l < 0.0 => format!("{:.0}°S", -l),
        l if l > 0.0 => format!("{:.0}°N", l),
        _ => "0°".to_string(),
    }
}

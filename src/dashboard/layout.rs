//! Backend-neutral description of one dashboard frame.
//!
//! A [`Layout`] is what a tab draws: a 2×2 grid of panels, each holding
//! plain data (points, labels, colors). The static PNG renderer and the live
//! egui renderer both consume it.

use nalgebra::Vector3;

use super::ground_track::TrackSegment;
use super::tab::Tab;
use crate::theme::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Rgb,
    pub points: Vec<[f64; 2]>,
}

/// 2D line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_scale: AxisScale,
    pub legend: bool,
    pub series: Vec<Series>,
}

impl Chart {
    /// Data bounds over every series as `([x0, y0], [x1, y1])`.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        bounds(self.series.iter().flat_map(|s| s.points.iter().copied()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: &'static str,
    pub color: Rgb,
    pub at: [f64; 2],
}

/// Longitude/latitude track colored by elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundTrack {
    pub segments: Vec<TrackSegment>,
    pub time_span: (f64, f64),
    pub markers: Vec<Marker>,
}

/// Inertial position trace, km.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub points: Vec<Vector3<f64>>,
    pub color: Rgb,
}

impl Trajectory {
    /// Half-width of the smallest origin-centered cube enclosing the trace.
    pub fn extent(&self) -> f64 {
        self.points.iter().map(|p| p.amax()).fold(0.0_f64, f64::max).max(1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelKind {
    Chart(Chart),
    GroundTrack(GroundTrack),
    Trajectory(Trajectory),
}

/// Grid position. `col_span` is 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub col_span: usize,
}

impl Cell {
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col, col_span: 1 }
    }

    pub const fn full_row(row: usize) -> Self {
        Self { row, col: 0, col_span: 2 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: &'static str,
    pub cell: Cell,
    pub kind: PanelKind,
}

/// Everything one tab puts on the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub tab: Tab,
    /// Relative heights of the two grid rows.
    pub row_weights: [f64; 2],
    pub panels: Vec<Panel>,
}

impl Layout {
    pub const ROWS: usize = 2;
    pub const COLS: usize = 2;

    /// Panels in `row`, ordered by column.
    pub fn row(&self, row: usize) -> Vec<&Panel> {
        let mut panels: Vec<&Panel> = self.panels.iter().filter(|p| p.cell.row == row).collect();
        panels.sort_by_key(|p| p.cell.col);
        panels
    }

    /// Fraction of the grid height taken by `row`.
    pub fn row_fraction(&self, row: usize) -> f64 {
        let total: f64 = self.row_weights.iter().sum();
        self.row_weights[row] / total
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Upper bound on points per drawn series.
    pub max_points: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { max_points: 2000 }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Evenly strided indices into `0..len`, at most `max_points` of them, always
/// including the first and last. `max_points < 2` disables decimation.
pub fn decimate_indices(len: usize, max_points: usize) -> Vec<usize> {
    if max_points < 2 || len <= max_points {
        return (0..len).collect();
    }
    let step = (len - 1).div_ceil(max_points - 1);
    let mut idx: Vec<usize> = (0..len - 1).step_by(step).collect();
    idx.push(len - 1);
    idx
}

pub(crate) fn bounds<I>(points: I) -> Option<([f64; 2], [f64; 2])>
where
    I: IntoIterator<Item = [f64; 2]>,
{
    points
        .into_iter()
        .filter(|p| p[0].is_finite() && p[1].is_finite())
        .fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((
                [lo[0].min(p[0]), lo[1].min(p[1])],
                [hi[0].max(p[0]), hi[1].max(p[1])],
            )),
        })
}

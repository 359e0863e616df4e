use std::ops::Range;

use crate::telemetry::Sample;

/// Longitude step (deg) between consecutive samples treated as an antimeridian wrap.
pub const WRAP_THRESHOLD_DEG: f64 = 300.0;

/// Quantization levels for time-colored track runs.
pub const COLOR_LEVELS: usize = 64;

/// Index ranges of runs that contain no wrap.
///
/// A new run starts after every `i` with `|lon[i+1] - lon[i]| > 300`. Each
/// consecutive jump therefore isolates a single-sample run. An empty input
/// yields no runs.
pub fn split_at_wraps(lons: &[f64]) -> Vec<Range<usize>> {
    if lons.is_empty() {
        return Vec::new();
    }
    let mut runs = Vec::new();
    let mut start = 0;
    for (i, w) in lons.windows(2).enumerate() {
        if (w[1] - w[0]).abs() > WRAP_THRESHOLD_DEG {
            runs.push(start..i + 1);
            start = i + 1;
        }
    }
    runs.push(start..lons.len());
    runs
}

// ---------------------------------------------------------------------------
// Track segments
// ---------------------------------------------------------------------------

/// Contiguous piece of ground track: `[lon, lat]` points and their times.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSegment {
    pub points: Vec<[f64; 2]>,
    pub times: Vec<f64>,
}

/// Polyline drawn in one color. `level` is normalized elapsed time in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRun {
    pub level: f64,
    pub points: Vec<[f64; 2]>,
}

impl TrackSegment {
    /// Keep at most `max_points` points, always retaining both ends.
    pub fn decimated(&self, max_points: usize) -> TrackSegment {
        let keep = super::layout::decimate_indices(self.points.len(), max_points);
        TrackSegment {
            points: keep.iter().map(|&i| self.points[i]).collect(),
            times: keep.iter().map(|&i| self.times[i]).collect(),
        }
    }

    /// Group consecutive line pieces by color.
    ///
    /// Each piece takes the color of its starting sample's time, normalized
    /// over `span` and quantized to `bins` levels. A single-point segment has
    /// no pieces and returns nothing.
    pub fn color_runs(&self, span: (f64, f64), bins: usize) -> Vec<ColorRun> {
        let bins = bins.max(1);
        let mut runs: Vec<ColorRun> = Vec::new();
        for i in 0..self.points.len().saturating_sub(1) {
            let level = quantize(normalize(self.times[i], span), bins);
            match runs.last_mut() {
                Some(run) if run.level == level => run.points.push(self.points[i + 1]),
                _ => runs.push(ColorRun {
                    level,
                    points: vec![self.points[i], self.points[i + 1]],
                }),
            }
        }
        runs
    }
}

/// Split samples into ground-track segments at every longitude wrap.
///
/// Samples without a finite position are dropped and break the track.
pub fn segments(samples: &[Sample]) -> Vec<TrackSegment> {
    let mut out = Vec::new();
    for run in samples.split(|s| !(s.lon.is_finite() && s.lat.is_finite())) {
        let lons: Vec<f64> = run.iter().map(|s| s.lon).collect();
        out.extend(split_at_wraps(&lons).into_iter().map(|r| TrackSegment {
            points: run[r.clone()].iter().map(|s| [s.lon, s.lat]).collect(),
            times: run[r].iter().map(|s| s.time).collect(),
        }));
    }
    out
}

/// Map `t` into [0, 1] over `span`. A zero-length span maps everything to 0.
pub fn normalize(t: f64, span: (f64, f64)) -> f64 {
    let (t0, t1) = span;
    if t1 > t0 {
        ((t - t0) / (t1 - t0)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn quantize(x: f64, bins: usize) -> f64 {
    let b = ((x * bins as f64).floor() as usize).min(bins - 1);
    (b as f64 + 0.5) / bins as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::table::fixtures;

    fn seg(lons: &[f64]) -> TrackSegment {
        TrackSegment {
            points: lons.iter().map(|&l| [l, 0.0]).collect(),
            times: (0..lons.len()).map(|i| i as f64).collect(),
        }
    }

    #[test]
    fn wrap_isolates_first_sample() {
        // 170 → -170 wraps; -170 → -160 does not.
        assert_eq!(split_at_wraps(&[170.0, -170.0, -160.0]), vec![0..1, 1..3]);
    }

    #[test]
    fn no_piece_spans_a_wrap() {
        // Both steps exceed the threshold (340° then 330°).
        let lons = [170.0, -170.0, 160.0];
        let runs = split_at_wraps(&lons);
        assert_eq!(runs[0], 0..1);
        assert_eq!(runs, vec![0..1, 1..2, 2..3]);
        for r in &runs {
            for w in lons[r.clone()].windows(2) {
                assert!((w[1] - w[0]).abs() <= WRAP_THRESHOLD_DEG);
            }
        }
    }

    #[test]
    fn no_wrap_gives_single_run() {
        assert_eq!(split_at_wraps(&[-10.0, 0.0, 10.0, 20.0]), vec![0..4]);
        assert!(split_at_wraps(&[]).is_empty());
        assert_eq!(split_at_wraps(&[42.0]), vec![0..1]);
    }

    #[test]
    fn exactly_threshold_is_not_a_wrap() {
        assert_eq!(split_at_wraps(&[150.0, -150.0]), vec![0..2]);
        assert_eq!(split_at_wraps(&[150.0, -150.000001]), vec![0..1, 1..2]);
    }

    #[test]
    fn segments_cover_every_sample() {
        let table = fixtures::circular_orbit(300);
        let segs = segments(table.samples());
        assert!(segs.len() > 1, "fixture orbit should cross the antimeridian");
        let total: usize = segs.iter().map(|s| s.points.len()).sum();
        assert_eq!(total, 300);
    }

    #[test]
    fn missing_position_breaks_the_track() {
        let mut samples = fixtures::circular_orbit(10).samples().to_vec();
        for s in samples.iter_mut() {
            s.lon = 10.0 + s.time / 60.0;
        }
        samples[4].lon = f64::NAN;
        let segs = segments(&samples);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].points.len(), 4);
        assert_eq!(segs[1].points.len(), 5);
        assert!(segs.iter().flat_map(|s| &s.points).all(|p| p[0].is_finite()));
    }

    #[test]
    fn single_point_segment_draws_nothing() {
        assert!(seg(&[170.0]).color_runs((0.0, 1.0), 8).is_empty());
    }

    #[test]
    fn color_runs_merge_equal_levels() {
        let s = seg(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        // Span 0..4 in two bins: pieces starting at t=0,1 are low, t=2,3 high.
        let runs = s.color_runs((0.0, 4.0), 2);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].points, vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
        assert_eq!(runs[1].points, vec![[2.0, 0.0], [3.0, 0.0], [4.0, 0.0]]);
        assert!(runs[0].level < runs[1].level);
    }

    #[test]
    fn decimation_keeps_both_ends() {
        let s = seg(&(0..1000).map(|i| i as f64 * 0.1).collect::<Vec<_>>());
        let d = s.decimated(50);
        assert!(d.points.len() <= 50);
        assert_eq!(d.points.first(), s.points.first());
        assert_eq!(d.points.last(), s.points.last());
        assert_eq!(d.points.len(), d.times.len());
    }

    #[test]
    fn normalize_handles_degenerate_span() {
        assert_eq!(normalize(5.0, (5.0, 5.0)), 0.0);
        assert_eq!(normalize(7.5, (5.0, 10.0)), 0.5);
    }
}

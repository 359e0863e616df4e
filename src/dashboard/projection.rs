use nalgebra::{Matrix3, Vector3};

/// Camera direction for the 3D trajectory views, in degrees.
///
/// Elevation is measured up from the XY plane, azimuth counter-clockwise
/// about +Z from +X. Changing the view never touches telemetry data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngles {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self { elevation_deg: 30.0, azimuth_deg: -60.0 }
    }
}

impl ViewAngles {
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        let mut v = Self { elevation_deg, azimuth_deg };
        v.rotate_by(0.0, 0.0);
        v
    }

    /// Apply a drag. Elevation saturates at ±90°, azimuth wraps to [-180, 180).
    pub fn rotate_by(&mut self, d_azimuth_deg: f64, d_elevation_deg: f64) {
        self.elevation_deg = (self.elevation_deg + d_elevation_deg).clamp(-90.0, 90.0);
        self.azimuth_deg = (self.azimuth_deg + d_azimuth_deg + 180.0).rem_euclid(360.0) - 180.0;
    }

    /// Rows: screen right, screen up, toward the viewer.
    pub fn camera(&self) -> Matrix3<f64> {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        Matrix3::new(
            -sa,       ca,       0.0,
            -se * ca,  -se * sa, ce,
            ce * ca,   ce * sa,  se,
        )
    }

    /// Orthographic screen coordinates of `p`.
    pub fn project(&self, p: &Vector3<f64>) -> [f64; 2] {
        let q = self.camera() * p;
        [q.x, q.y]
    }

    /// Project a whole trace with one camera matrix.
    pub fn project_all<'a, I>(&self, points: I) -> Vec<[f64; 2]>
    where
        I: IntoIterator<Item = &'a Vector3<f64>>,
    {
        let cam = self.camera();
        points
            .into_iter()
            .map(|p| {
                let q = cam * p;
                [q.x, q.y]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_is_orthonormal() {
        for v in [ViewAngles::default(), ViewAngles::new(-45.0, 120.0), ViewAngles::new(90.0, 0.0)] {
            let c = v.camera();
            let err = (c * c.transpose() - Matrix3::identity()).norm();
            assert!(err < 1e-12, "camera not orthonormal for {v:?}");
        }
    }

    #[test]
    fn top_down_view_shows_xy_plane() {
        let v = ViewAngles::new(90.0, -90.0);
        let [x, y] = v.project(&Vector3::new(1.0, 0.0, 0.0));
        assert!((x - 1.0).abs() < 1e-12 && y.abs() < 1e-12);
        let [x, y] = v.project(&Vector3::new(0.0, 0.0, 5.0));
        assert!(x.abs() < 1e-12 && y.abs() < 1e-12);
    }

    #[test]
    fn side_view_keeps_z_up() {
        let v = ViewAngles::new(0.0, 0.0);
        let [x, y] = v.project(&Vector3::new(0.0, 2.0, 3.0));
        assert!((x - 2.0).abs() < 1e-12);
        assert!((y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn drag_clamps_and_wraps() {
        let mut v = ViewAngles::default();
        v.rotate_by(0.0, 200.0);
        assert_eq!(v.elevation_deg, 90.0);
        v.rotate_by(250.0, 0.0);
        assert!((v.azimuth_deg - (-170.0)).abs() < 1e-12);
        v.rotate_by(-20.0, -500.0);
        assert_eq!(v.elevation_deg, -90.0);
        assert!((v.azimuth_deg - 170.0).abs() < 1e-12);
    }

    #[test]
    fn project_all_matches_project() {
        let v = ViewAngles::default();
        let pts = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(-4.0, 0.5, 7.0)];
        let all = v.project_all(&pts);
        assert_eq!(all[1], v.project(&pts[1]));
    }
}

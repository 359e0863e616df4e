use std::path::{Path, PathBuf};

use crate::dashboard::{LayoutOptions, ViewAngles};

// ---------------------------------------------------------------------------
// Dashboard config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_file: PathBuf,      // telemetry CSV written by the simulation
    pub image_file: PathBuf,     // static Orbit tab, overwritten each run
    pub figure_size: (f64, f64), // inches
    pub dpi: u32,
    pub max_points: usize,       // per drawn series
    pub view: ViewAngles,        // initial 3D camera
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::rooted_at(Path::new(env!("CARGO_MANIFEST_DIR")))
    }
}

impl DashboardConfig {
    /// Defaults with the conventional `output/` and `docs/images/` paths under `root`.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            data_file: root.join("output").join("simulation_data.csv"),
            image_file: root.join("docs").join("images").join("mission_dashboard.png"),
            figure_size: (15.0, 10.0),
            dpi: 300,
            max_points: 2000,
            view: ViewAngles::default(),
        }
    }

    /// Static image size in pixels.
    pub fn image_size(&self) -> (u32, u32) {
        let (w, h) = self.figure_size;
        let dpi = self.dpi as f64;
        ((w * dpi).round().max(1.0) as u32, (h * dpi).round().max(1.0) as u32)
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions { max_points: self.max_points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_follow_convention() {
        let c = DashboardConfig::rooted_at(Path::new("/proj"));
        assert_eq!(c.data_file, Path::new("/proj/output/simulation_data.csv"));
        assert_eq!(c.image_file, Path::new("/proj/docs/images/mission_dashboard.png"));
    }

    #[test]
    fn image_size_from_figure_and_dpi() {
        let c = DashboardConfig::default();
        assert_eq!(c.image_size(), (4500, 3000));
        let small = DashboardConfig { figure_size: (4.0, 3.0), dpi: 50, ..c };
        assert_eq!(small.image_size(), (200, 150));
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::dashboard::DashboardController;
use crate::error::RenderError;
use crate::render::PngSurface;
use crate::telemetry::TelemetryTable;

/// Render the initial `Orbit` tab to `config.image_file`, replacing any
/// previous image. Returns the written path.
pub fn export_static(
    table: Arc<TelemetryTable>,
    config: &DashboardConfig,
) -> Result<PathBuf, RenderError> {
    let surface = PngSurface::new(&config.image_file, config.image_size(), config.dpi, config.view);
    let controller = DashboardController::open(table, surface, config.layout_options())?;
    let path = controller.into_surface().path().to_path_buf();
    log::info!("Dashboard image saved to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::scratch_dir;
    use crate::telemetry::table::fixtures;

    fn small_config(root: &std::path::Path) -> DashboardConfig {
        DashboardConfig {
            figure_size: (6.0, 4.0),
            dpi: 60,
            ..DashboardConfig::rooted_at(root)
        }
    }

    #[test]
    fn export_writes_png_under_docs() {
        let root = scratch_dir("export");
        let config = small_config(&root);
        let table = Arc::new(fixtures::circular_orbit(200));

        let path = export_static(table, &config).unwrap();
        assert_eq!(path, root.join("docs/images/mission_dashboard.png"));
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn second_export_overwrites_first() {
        let root = scratch_dir("overwrite");
        let config = small_config(&root);
        let table = Arc::new(fixtures::circular_orbit(120));

        export_static(table.clone(), &config).unwrap();
        export_static(table, &config).unwrap();

        let files: Vec<_> = std::fs::read_dir(root.join("docs/images"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(files, vec![std::ffi::OsString::from("mission_dashboard.png")]);
    }

    #[test]
    fn empty_table_still_exports() {
        let root = scratch_dir("empty");
        let config = small_config(&root);
        let path = export_static(Arc::new(TelemetryTable::default()), &config).unwrap();
        assert!(path.exists());
    }
}

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Failure to turn a telemetry file into a [`TelemetryTable`](crate::telemetry::TelemetryTable).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(
        "data file not found: {}\n\
         Please run the simulation first:\n\
         1. cargo run --release   (in the simulation crate)\n\
         2. copy or link its output/simulation_data.csv next to this dashboard",
        path.display()
    )]
    FileNotFound { path: PathBuf },

    #[error("missing expected columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("row {row}, column \"{column}\": cannot parse {value:?} as a number")]
    Value {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Failure while drawing a dashboard frame or writing it out.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("drawing backend: {0}")]
    Backend(String),

    #[error("font registration failed: {0}")]
    Font(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Backend(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_path_and_remedy() {
        let err = LoadError::FileNotFound { path: PathBuf::from("/tmp/nowhere/sim.csv") };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/nowhere/sim.csv"));
        assert!(msg.contains("run the simulation first"));
    }

    #[test]
    fn schema_message_lists_every_column() {
        let err = LoadError::Schema {
            missing: vec!["Thrust X (N)".into(), "Quaternion W".into()],
        };
        assert_eq!(err.to_string(), "missing expected columns: Thrust X (N), Quaternion W");
    }
}

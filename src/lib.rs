pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod io;
pub mod render;
pub mod telemetry;
pub mod theme;
#[cfg(feature = "viz")]
pub mod viz;

pub use config::DashboardConfig;
pub use dashboard::{DashboardController, Tab};
pub use error::{LoadError, RenderError};
pub use export::export_static;
pub use telemetry::{Sample, TelemetrySummary, TelemetryTable};

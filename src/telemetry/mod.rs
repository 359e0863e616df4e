pub mod columns;
pub mod table;
pub mod summary;

pub use summary::TelemetrySummary;
pub use table::{Sample, TelemetryTable};

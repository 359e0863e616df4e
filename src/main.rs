//! Load the telemetry, write the Orbit tab PNG, then open the live windows.
//! Build with `--no-default-features` for an export-only headless binary.

use std::process::ExitCode;
use std::sync::Arc;

use mission_dashboard::{export_static, io, DashboardConfig, TelemetrySummary};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = DashboardConfig::default();

    let table = Arc::new(io::load(&config.data_file)?);
    log::info!("{}", TelemetrySummary::from_table(&table).headline());

    export_static(Arc::clone(&table), &config)?;

    #[cfg(feature = "viz")]
    mission_dashboard::viz::run(table, &config)?;

    Ok(())
}

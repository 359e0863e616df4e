use std::process::ExitCode;
use std::sync::Arc;

use mission_dashboard::{io, viz, DashboardConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();
    let table = match io::load(&config.data_file) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match viz::run(table, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Viewer failed: {e}");
            ExitCode::FAILURE
        }
    }
}

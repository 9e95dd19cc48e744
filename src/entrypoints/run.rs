use super::profiling::setup_logging_and_profiling;
use crate::app::{self, settings::Settings};
use std::process::ExitCode;

/// Log the package name and version
fn log_version_info() {
    tracing::debug!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Native entry point
pub fn native_main() -> ExitCode {
    // Setup logging
    setup_logging_and_profiling();
    log_version_info();

    let settings = Settings::from_cli();
    let stdout = std::io::stdout();
    match app::run(&settings, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

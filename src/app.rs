use std::io;
use std::process::ExitCode;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::application::CatalogImport;
use crate::domain::app_config::DEFAULT_LOG_LEVEL;
use crate::domain::error::AppError;
use crate::infrastructure::config::ConfigService;
use crate::interfaces::console::{render_diagnostic, render_report};

pub fn run() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let config = match ConfigService::new().load() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(DEFAULT_LOG_LEVEL);
            report_failure(&err);
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config.log_level);
    debug!(?config, "Configuration loaded");

    let report = CatalogImport::from_config(&config).run();

    if let Some(failure) = &report.failure {
        report_failure(failure);
    }
    if let Err(err) = render_report(&report, &mut io::stdout().lock()) {
        warn!(error = %err, "Failed to write report to stdout");
    }

    ExitCode::from(report.exit_code())
}

fn report_failure(failure: &AppError) {
    if let Err(err) = render_diagnostic(failure, &mut io::stderr().lock()) {
        warn!(error = %err, "Failed to write diagnostic to stderr");
    }
}

// Logs share stderr with diagnostics so stdout stays a clean report.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

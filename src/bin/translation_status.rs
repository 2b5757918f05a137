//! Reports genuine, duplicate and missing article translations per locale.

use std::io::Write;
use std::process::ExitCode;

use article_translations::ConfigManager;
use article_translations::status::build_status_report;

fn main() -> ExitCode {
    article_translations::logging::init();

    let mut config = ConfigManager::new();
    if let Err(err) = config.load_settings(".".into()) {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }

    let report = match build_status_report(&config) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = write!(std::io::stdout().lock(), "{report}") {
        tracing::error!("Failed to write report: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

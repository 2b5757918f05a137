//! Reports the shape of the pre-authored English translation table.

use std::io::Write;
use std::process::ExitCode;

use article_translations::ENGLISH_TRANSLATIONS;

fn main() -> ExitCode {
    article_translations::logging::init();

    tracing::debug!(entries = ENGLISH_TRANSLATIONS.len(), "Reporting translation table");
    if let Err(err) = write!(std::io::stdout().lock(), "{ENGLISH_TRANSLATIONS}") {
        tracing::error!("Failed to write report: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

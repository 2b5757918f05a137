//! Reports on the source articles awaiting a full translation.

use std::io::Write;
use std::process::ExitCode;

use article_translations::ConfigManager;
use article_translations::selector::{
    ARTICLES_TO_TRANSLATE,
    SelectionReport,
    load_selected_articles,
};

fn main() -> ExitCode {
    article_translations::logging::init();

    let mut config = ConfigManager::new();
    if let Err(err) = config.load_settings(".".into()) {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }

    let selected = match load_selected_articles(&config.source_document_path(), ARTICLES_TO_TRANSLATE)
    {
        Ok(selected) => selected,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let report = SelectionReport::new(ARTICLES_TO_TRANSLATE, &selected);
    if let Err(err) = write!(std::io::stdout().lock(), "{report}") {
        tracing::error!("Failed to write report: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

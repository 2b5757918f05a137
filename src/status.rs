//! Translation status of every target locale against the source locale.
/// Locale discovery
mod discovery;
/// Status classification and report
mod report;

use thiserror::Error;

pub use discovery::{
    DiscoveryError,
    discover_locales,
};
pub use report::{
    LocaleStatus,
    StatusReport,
    TranslationStatus,
};

use crate::config::ConfigManager;
use crate::input::{
    RessourcesDocument,
    RessourcesError,
};

#[derive(Error, Debug)]
pub enum StatusError {
    #[error(transparent)]
    Ressources(#[from] RessourcesError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Compares every target locale's resource document with the source one.
///
/// Target locales are the configured ones, or the discovered ones when none
/// are configured. A target locale without a document counts as having no
/// articles.
///
/// # Errors
/// - The source document is missing or invalid
/// - A target document exists but is invalid
/// - Locale discovery fails
pub fn build_status_report(config: &ConfigManager) -> Result<StatusReport, StatusError> {
    let settings = config.settings();
    let source = RessourcesDocument::load(&config.source_document_path())?;

    let locales = match &settings.locales {
        Some(locales) => locales.clone(),
        None => discover_locales(
            &config.translations_root(),
            &settings.file_name,
            &settings.source_locale,
        )?,
    };

    let mut statuses = Vec::with_capacity(locales.len());
    for locale in &locales {
        let target = RessourcesDocument::load_or_empty(&config.document_path(locale))?;
        let status = LocaleStatus::compare(locale, &source.articles, &target.articles);
        tracing::debug!(
            locale,
            genuine = status.genuine.len(),
            duplicates = status.duplicates.len(),
            missing = status.missing.len(),
            "Compared locale"
        );
        statuses.push(status);
    }

    Ok(StatusReport {
        source_locale: settings.source_locale.clone(),
        source_total: source.articles.len(),
        locales: statuses,
    })
}

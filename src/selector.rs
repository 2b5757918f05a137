//! Source article selection by slug.
//!
//! Picks the source-locale articles that still need a full translation and
//! reports their size.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::input::{
    ArticleRecord,
    RessourcesDocument,
    RessourcesError,
    Slugged,
};

/// Use-case articles awaiting a full translation, in reporting order.
pub const ARTICLES_TO_TRANSLATE: &[&str] = &[
    "automatisation-courrier-entrant-ia",
    "detection-delais-spfx-calendriers",
    "relance-factures-impayees-power-automate",
    "resume-documents-juridiques-azure-ai",
    "assistant-redaction-contrats-ia",
    "analyse-predictive-ventes-azure-ml",
    "recherche-semantique-base-connaissances",
    "transcription-reunions-teams-ia",
    "controle-qualite-vision-ia",
    "analyse-sentiment-feedback-clients",
    "allocation-taches-dynamique-teams-planner",
    "validation-notes-frais-power-automate-approvals",
    "onboarding-clients-automatise-sharepoint-forms",
    "tableau-bord-projets-power-bi-project",
];

/// Keeps the articles whose slug is wanted, keyed by slug.
///
/// Wanted slugs that are absent from `articles` are left out of the result
/// without error. If the collection repeats a slug, the last record wins.
#[must_use]
pub fn select_articles<T, I>(articles: I, wanted: &[&str]) -> HashMap<String, T>
where
    T: Slugged,
    I: IntoIterator<Item = T>,
{
    articles.into_iter().filter(|article| wanted.contains(&article.slug())).fold(
        HashMap::new(),
        |mut selected, article| {
            selected.insert(article.slug().to_string(), article);
            selected
        },
    )
}

/// Loads the document at `path` and selects the wanted articles from it.
///
/// Only selected articles must carry `title` and `content`; the rest of the
/// document may hold drafts.
///
/// # Errors
/// - [`RessourcesError`] from reading or parsing the document
/// - [`RessourcesError::Incomplete`] for the first selected article, in
///   wanted-list order, that lacks `title` or `content`
pub fn load_selected_articles(
    path: &Path,
    wanted: &[&str],
) -> Result<HashMap<String, ArticleRecord>, RessourcesError> {
    let document = RessourcesDocument::load(path)?;
    let mut entries = select_articles(document.articles, wanted);

    let mut selected = HashMap::with_capacity(entries.len());
    for slug in wanted {
        let Some(entry) = entries.remove(*slug) else {
            tracing::debug!(slug, "Wanted slug is not in the source document");
            continue;
        };
        let record = entry
            .into_record()
            .map_err(|source| RessourcesError::Incomplete { path: path.to_path_buf(), source })?;
        selected.insert(record.slug.clone(), record);
    }
    Ok(selected)
}

/// Console summary of a selection, in wanted-list order.
#[derive(Debug)]
pub struct SelectionReport<'a> {
    /// Wanted slugs driving the output order
    wanted: &'a [&'a str],
    /// Articles found for those slugs
    selected: &'a HashMap<String, ArticleRecord>,
}

impl<'a> SelectionReport<'a> {
    #[must_use]
    pub const fn new(wanted: &'a [&'a str], selected: &'a HashMap<String, ArticleRecord>) -> Self {
        Self { wanted, selected }
    }

    /// Number of matched articles.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.selected.len()
    }

    /// Sum of the matched articles' content lengths in characters.
    #[must_use]
    pub fn total_chars(&self) -> usize {
        self.selected.values().map(ArticleRecord::content_chars).sum()
    }

    /// Matched articles, in wanted-list order.
    pub fn ordered(&self) -> impl Iterator<Item = &'a ArticleRecord> + '_ {
        self.wanted.iter().filter_map(|slug| self.selected.get(*slug))
    }
}

impl fmt::Display for SelectionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} articles to translate", self.matched())?;
        writeln!(f, "Total characters to translate: {}", self.total_chars())?;

        for article in self.ordered() {
            writeln!(f)?;
            writeln!(f, "{}:", article.slug)?;
            writeln!(f, "  Title: {}", article.title)?;
            writeln!(f, "  Content: {} chars", article.content_chars())?;
        }
        Ok(())
    }
}

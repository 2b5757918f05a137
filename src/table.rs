//! Pre-authored English translations of use-case articles.
//!
//! The texts are kept under `translations/en/` and embedded at compile time.
//! Merging them into the English resource document is done elsewhere.

use std::fmt;

/// An immutable, ordered slug → text table.
#[derive(Debug, Clone, Copy)]
pub struct TranslationTable {
    /// Entries in declaration order
    entries: &'static [(&'static str, &'static str)],
}

/// English translations, in the order they were written.
pub const ENGLISH_TRANSLATIONS: TranslationTable = TranslationTable::new(&[
    (
        "resume-documents-juridiques-azure-ai",
        include_str!("../translations/en/resume-documents-juridiques-azure-ai.md"),
    ),
    (
        "assistant-redaction-contrats-ia",
        include_str!("../translations/en/assistant-redaction-contrats-ia.md"),
    ),
    (
        "analyse-predictive-ventes-azure-ml",
        include_str!("../translations/en/analyse-predictive-ventes-azure-ml.md"),
    ),
]);

impl TranslationTable {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translated text for `slug`, if the table has one.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&'static str> {
        self.entries.iter().find(|(key, _)| *key == slug).map(|(_, text)| *text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// `(slug, length in characters)` for every entry, in table order.
    pub fn lengths(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.iter().map(|(slug, text)| (slug, text.chars().count()))
    }

    #[must_use]
    pub fn total_chars(&self) -> usize {
        self.lengths().map(|(_, len)| len).sum()
    }
}

impl fmt::Display for TranslationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Translation content prepared for {} articles", self.len())?;
        for (slug, len) in self.lengths() {
            writeln!(f, "- {slug}: {len} chars")?;
        }
        writeln!(f, "Total: {} chars", self.total_chars())
    }
}

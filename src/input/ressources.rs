//! Resource document input definitions

use std::path::{
    Path,
    PathBuf,
};

use serde::Deserialize;
use thiserror::Error;

/// Anything keyed by an article slug.
pub trait Slugged {
    fn slug(&self) -> &str;
}

/// An article as stored in a locale's resource document.
///
/// Only `slug` is required. Drafts and half-translated locales may lack the
/// other fields; author, date, image and references are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleEntry {
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// An article with every field the selection report reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub slug: String,
    pub title: String,
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("article '{slug}' has no `{field}` field")]
pub struct MissingField {
    pub slug: String,
    pub field: &'static str,
}

impl Slugged for ArticleEntry {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for ArticleRecord {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl ArticleEntry {
    /// Turns the entry into a complete record.
    ///
    /// # Errors
    /// [`MissingField`] naming the first of `title`, `content` that is absent.
    pub fn into_record(self) -> Result<ArticleRecord, MissingField> {
        let Some(title) = self.title else {
            return Err(MissingField { slug: self.slug, field: "title" });
        };
        let Some(content) = self.content else {
            return Err(MissingField { slug: self.slug, field: "content" });
        };
        Ok(ArticleRecord { slug: self.slug, title, content })
    }
}

impl From<ArticleRecord> for ArticleEntry {
    fn from(record: ArticleRecord) -> Self {
        Self {
            slug: record.slug,
            title: Some(record.title),
            description: None,
            content: Some(record.content),
        }
    }
}

impl ArticleRecord {
    /// Length of the body in characters.
    #[must_use]
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// Top-level shape of `ressources.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RessourcesDocument {
    #[serde(rename = "Articles", default)]
    pub articles: Vec<ArticleEntry>,
}

#[derive(Error, Debug)]
pub enum RessourcesError {
    #[error("Failed to read resource document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse resource document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Incomplete article in resource document {}: {source}", path.display())]
    Incomplete {
        path: PathBuf,
        #[source]
        source: MissingField,
    },
}

impl RessourcesDocument {
    /// Parses a resource document from its JSON text.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed JSON or an article
    /// without a `slug`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    /// - [`RessourcesError::Io`] when the file is missing or unreadable
    /// - [`RessourcesError::Parse`] when the content is not a valid document
    pub fn load(path: &Path) -> Result<Self, RessourcesError> {
        tracing::debug!(path = %path.display(), "Loading resource document");

        let content = std::fs::read_to_string(path)
            .map_err(|source| RessourcesError::Io { path: path.to_path_buf(), source })?;
        let document = Self::from_json(&content)
            .map_err(|source| RessourcesError::Parse { path: path.to_path_buf(), source })?;

        tracing::debug!(
            path = %path.display(),
            articles = document.articles.len(),
            "Resource document loaded"
        );
        Ok(document)
    }

    /// Like [`Self::load`], but a missing file yields an empty document.
    ///
    /// # Errors
    /// Same as [`Self::load`] for anything other than a missing file.
    pub fn load_or_empty(path: &Path) -> Result<Self, RessourcesError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Resource document not found, treating as empty");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::article;

    #[rstest]
    fn from_json_ignores_unknown_fields() {
        let json = r#"{
            "Articles": [
                {
                    "slug": "a",
                    "title": "Titre",
                    "content": "Contenu",
                    "author": "Équipe",
                    "references": [{"url": "https://example.com"}]
                }
            ],
            "Categories": []
        }"#;

        let document = RessourcesDocument::from_json(json).unwrap();

        assert_that!(
            document.articles,
            elements_are![all![
                field!(ArticleEntry.slug, eq("a")),
                field!(ArticleEntry.title, some(eq("Titre"))),
                field!(ArticleEntry.description, none())
            ]]
        );
    }

    #[rstest]
    fn from_json_without_articles_key_is_empty() {
        let document = RessourcesDocument::from_json(r#"{"Guides": []}"#).unwrap();

        assert_that!(document.articles, is_empty());
    }

    #[rstest]
    fn from_json_accepts_article_without_content() {
        let document =
            RessourcesDocument::from_json(r#"{"Articles": [{"slug": "draft", "title": "t"}]}"#)
                .unwrap();

        assert_that!(
            document.articles,
            elements_are![all![
                field!(ArticleEntry.slug, eq("draft")),
                field!(ArticleEntry.content, none())
            ]]
        );
    }

    #[rstest]
    fn from_json_article_missing_slug_is_an_error() {
        let result = RessourcesDocument::from_json(r#"{"Articles": [{"title": "t", "content": "c"}]}"#);

        assert_that!(result, err(displays_as(contains_substring("slug"))));
    }

    #[rstest]
    #[case::complete(Some("t"), Some("c"), Ok(article("a", "t", "c")))]
    #[case::no_title(None, Some("c"), Err(MissingField { slug: "a".to_string(), field: "title" }))]
    #[case::no_content(Some("t"), None, Err(MissingField { slug: "a".to_string(), field: "content" }))]
    fn into_record_requires_title_and_content(
        #[case] title: Option<&str>,
        #[case] content: Option<&str>,
        #[case] expected: Result<ArticleRecord, MissingField>,
    ) {
        let entry = ArticleEntry {
            slug: "a".to_string(),
            title: title.map(str::to_string),
            description: None,
            content: content.map(str::to_string),
        };

        assert_eq!(entry.into_record(), expected);
    }

    #[rstest]
    #[case("", 0)]
    #[case("abc", 3)]
    #[case("Société générale", 16)]
    #[case("€", 1)]
    fn content_chars_counts_characters_not_bytes(#[case] content: &str, #[case] expected: usize) {
        assert_that!(article("s", "t", content).content_chars(), eq(expected));
    }

    #[rstest]
    fn load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ressources.json");

        let result = RessourcesDocument::load(&path);

        assert!(matches!(result, Err(RessourcesError::Io { .. })));
    }

    #[rstest]
    fn load_invalid_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ressources.json");
        fs::write(&path, "{ not json").unwrap();

        let result = RessourcesDocument::load(&path);

        assert!(matches!(result, Err(RessourcesError::Parse { .. })));
    }

    #[rstest]
    fn load_or_empty_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();

        let document = RessourcesDocument::load_or_empty(&temp_dir.path().join("nope.json")).unwrap();

        assert_that!(document.articles, is_empty());
    }
}

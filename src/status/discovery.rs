//! Locale discovery in the translations directory.

use std::path::{
    Component,
    Path,
};

use globset::{
    GlobBuilder,
    GlobMatcher,
};
use ignore::WalkBuilder;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Invalid translation file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Builds the `<locale>/<file_name>` matcher.
fn document_matcher(file_name: &str) -> Result<GlobMatcher, DiscoveryError> {
    let pattern = format!("*/{file_name}");
    GlobBuilder::new(&pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| DiscoveryError::Pattern { pattern, source })
}

/// Finds every locale directory under `translations_root` holding `file_name`.
///
/// The source locale is left out. Locales are returned sorted. A missing
/// translations directory yields no locales.
///
/// # Errors
/// [`DiscoveryError::Pattern`] when `file_name` does not form a valid glob.
pub fn discover_locales(
    translations_root: &Path,
    file_name: &str,
    source_locale: &str,
) -> Result<Vec<String>, DiscoveryError> {
    tracing::debug!(root = %translations_root.display(), file_name, "Discovering locales");
    let matcher = document_matcher(file_name)?;
    let mut locales = Vec::new();

    for result in WalkBuilder::new(translations_root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .max_depth(Some(2))
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let Ok(relative_path) = entry.path().strip_prefix(translations_root) else {
            continue;
        };
        if !matcher.is_match(relative_path) {
            continue;
        }

        let Some(Component::Normal(locale)) = relative_path.components().next() else {
            continue;
        };
        let Some(locale) = locale.to_str() else {
            tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 locale directory");
            continue;
        };
        if locale != source_locale {
            locales.push(locale.to_string());
        }
    }

    locales.sort();
    locales.dedup();
    tracing::debug!(?locales, "Discovered locales");
    Ok(locales)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    #[rstest]
    fn discovers_sorted_target_locales() {
        let temp_dir = TempDir::new().unwrap();
        for relative in ["pt/ressources.json", "fr/ressources.json", "en/ressources.json", "de/ressources.json"] {
            touch(temp_dir.path(), relative);
        }

        let locales = discover_locales(temp_dir.path(), "ressources.json", "fr").unwrap();

        assert_that!(locales, elements_are![eq("de"), eq("en"), eq("pt")]);
    }

    #[rstest]
    fn ignores_other_files_and_nesting() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "en/common.json");
        touch(temp_dir.path(), "ressources.json");
        touch(temp_dir.path(), "es/legacy/ressources.json");
        touch(temp_dir.path(), "de/ressources.json");

        let locales = discover_locales(temp_dir.path(), "ressources.json", "fr").unwrap();

        assert_that!(locales, elements_are![eq("de")]);
    }

    #[rstest]
    fn missing_root_yields_no_locales() {
        let temp_dir = TempDir::new().unwrap();

        let locales =
            discover_locales(&temp_dir.path().join("absent"), "ressources.json", "fr").unwrap();

        assert_that!(locales, is_empty());
    }

    #[rstest]
    fn invalid_file_name_is_pattern_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = discover_locales(temp_dir.path(), "[ressources.json", "fr");

        assert!(matches!(result, Err(DiscoveryError::Pattern { .. })));
    }
}

//! Per-locale translation status and its console report.

use std::collections::HashMap;
use std::fmt;

use crate::input::ArticleEntry;

/// Duplicate slugs listed before truncating.
const MAX_LISTED_DUPLICATES: usize = 10;
/// Missing slugs are listed only up to this count.
const MAX_LISTED_MISSING: usize = 5;

/// How a target locale's article relates to its source article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationStatus {
    /// Differs from the source in title, description or content.
    Genuine,
    /// Identical to the source.
    Duplicate,
    /// No article with this slug in the target locale.
    Missing,
}

impl TranslationStatus {
    /// Classifies `target` against `source`. An absent field equals an empty
    /// one.
    #[must_use]
    pub fn classify(source: &ArticleEntry, target: Option<&ArticleEntry>) -> Self {
        let Some(target) = target else {
            return Self::Missing;
        };

        let same = same_text(target.title.as_deref(), source.title.as_deref())
            && same_text(target.description.as_deref(), source.description.as_deref())
            && same_text(target.content.as_deref(), source.content.as_deref());

        if same { Self::Duplicate } else { Self::Genuine }
    }
}

/// Compares optional fields, with `None` read as the empty string.
fn same_text(left: Option<&str>, right: Option<&str>) -> bool {
    left.unwrap_or_default() == right.unwrap_or_default()
}

/// Classified source slugs for one target locale, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStatus {
    pub locale: String,
    pub genuine: Vec<String>,
    pub duplicates: Vec<String>,
    pub missing: Vec<String>,
}

impl LocaleStatus {
    #[must_use]
    pub fn compare(locale: &str, source: &[ArticleEntry], target: &[ArticleEntry]) -> Self {
        let by_slug: HashMap<&str, &ArticleEntry> =
            target.iter().map(|article| (article.slug.as_str(), article)).collect();

        let mut status = Self { locale: locale.to_string(), ..Self::default() };
        for article in source {
            let slug = article.slug.clone();
            match TranslationStatus::classify(article, by_slug.get(article.slug.as_str()).copied()) {
                TranslationStatus::Genuine => status.genuine.push(slug),
                TranslationStatus::Duplicate => status.duplicates.push(slug),
                TranslationStatus::Missing => status.missing.push(slug),
            }
        }
        status
    }
}

/// Whole-site translation status against the source locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub source_locale: String,
    pub source_total: usize,
    pub locales: Vec<LocaleStatus>,
}

impl StatusReport {
    /// Every article URL the sitemap keeps: all source articles plus the
    /// genuine translations.
    #[must_use]
    pub fn unique_urls(&self) -> usize {
        self.source_total + self.locales.iter().map(|l| l.genuine.len()).sum::<usize>()
    }

    #[must_use]
    pub fn duplicate_urls_removed(&self) -> usize {
        self.locales.iter().map(|l| l.duplicates.len()).sum()
    }

    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.locales.iter().any(|l| !l.duplicates.is_empty())
    }
}

/// Share of `part` in `total` as a one-decimal percentage, rounded half up.
fn format_coverage(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    let permille = (part * 2000 + total) / (total * 2);
    format!("{}.{}", permille / 10, permille % 10)
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(80);
        let thin = "-".repeat(40);
        let source = self.source_locale.to_uppercase();

        writeln!(f, "{rule}")?;
        writeln!(f, "ARTICLE TRANSLATION VALIDATION REPORT")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;

        for status in &self.locales {
            writeln!(f)?;
            writeln!(f, "[{}] Translation Status:", status.locale.to_uppercase())?;
            writeln!(f, "{thin}")?;
            writeln!(f, "  ✅ Genuine translations: {}", status.genuine.len())?;
            writeln!(f, "  ⚠️  Duplicates (same as {source}): {}", status.duplicates.len())?;
            writeln!(f, "  ❌ Missing: {}", status.missing.len())?;

            if !status.duplicates.is_empty() {
                writeln!(f)?;
                if status.duplicates.len() <= MAX_LISTED_DUPLICATES {
                    writeln!(f, "  Duplicate articles (will be excluded from sitemap):")?;
                } else {
                    writeln!(f, "  First {MAX_LISTED_DUPLICATES} duplicate articles:")?;
                }
                for slug in status.duplicates.iter().take(MAX_LISTED_DUPLICATES) {
                    writeln!(f, "    - {slug}")?;
                }
                let hidden = status.duplicates.len().saturating_sub(MAX_LISTED_DUPLICATES);
                if hidden > 0 {
                    writeln!(f, "    ... and {hidden} more")?;
                }
            }

            if !status.missing.is_empty() && status.missing.len() <= MAX_LISTED_MISSING {
                writeln!(f)?;
                writeln!(f, "  Missing articles:")?;
                for slug in &status.missing {
                    writeln!(f, "    - {slug}")?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "SUMMARY")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "Total {source} articles: {}", self.source_total)?;
        writeln!(f)?;
        writeln!(f, "By locale:")?;
        for status in &self.locales {
            writeln!(
                f,
                "  {}: {} genuine ({}% coverage), {} duplicates, {} missing",
                status.locale.to_uppercase(),
                status.genuine.len(),
                format_coverage(status.genuine.len(), self.source_total),
                status.duplicates.len(),
                status.missing.len()
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{thin}")?;
        writeln!(f, "SITEMAP IMPACT:")?;
        writeln!(f, "{thin}")?;
        for status in &self.locales {
            writeln!(
                f,
                "  {}: {} URLs will be in sitemap",
                status.locale.to_uppercase(),
                status.genuine.len()
            )?;
        }
        writeln!(f, "  {source}: {} URLs will be in sitemap", self.source_total)?;
        writeln!(f)?;
        writeln!(f, "  Total unique article URLs in sitemap: {}", self.unique_urls())?;
        writeln!(f, "  Duplicate URLs removed: {}", self.duplicate_urls_removed())?;
        writeln!(f)?;

        if self.has_duplicates() {
            writeln!(
                f,
                "⚠️  Warning: Some locales have duplicate content that will be excluded from sitemap."
            )?;
            writeln!(f, "   Consider translating these articles or keeping them excluded.")?;
        }
        Ok(())
    }
}

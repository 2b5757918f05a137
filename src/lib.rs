//! article-translations
//!
//! Authoring tools for the per-locale article resources of the website:
//! source article selection, pre-authored translation tables and
//! translation status reporting.

pub mod config;
pub mod input;
pub mod logging;
pub mod selector;
pub mod status;
pub mod table;

#[cfg(test)]
mod test_utils;

pub use config::ConfigManager;
pub use input::{
    ArticleRecord,
    RessourcesDocument,
    RessourcesError,
};
pub use table::{
    ENGLISH_TRANSLATIONS,
    TranslationTable,
};

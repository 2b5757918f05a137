use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "locales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationSettings {
    /// Directory holding one sub-directory per locale.
    pub translations_dir: String,

    /// Locale the articles are authored in.
    pub source_locale: String,

    /// Resource document name inside each locale directory.
    pub file_name: String,

    /// Target locales to compare against the source.
    ///
    /// - `None`: every locale directory holding `file_name` (default)
    /// - `Some([...])`: only the listed locales
    pub locales: Option<Vec<String>>,
}

impl TranslationSettings {
    /// # Errors
    /// - Required field is empty
    /// - Resource file name is not a JSON file or not a valid glob literal
    /// - Locale list has empty entries or repeats the source locale
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.translations_dir.is_empty() {
            errors.push(ValidationError::new(
                "translationsDir",
                "The directory cannot be empty. Example: \"src/translations\"",
            ));
        }

        if self.source_locale.is_empty() {
            errors.push(ValidationError::new(
                "sourceLocale",
                "The source locale cannot be empty. Example: \"fr\"",
            ));
        }

        if self.file_name.is_empty() {
            errors.push(ValidationError::new(
                "fileName",
                "The file name cannot be empty. Example: \"ressources.json\"",
            ));
        } else if !self.file_name.ends_with(".json") {
            errors.push(ValidationError::new(
                "fileName",
                format!("Resource documents must be JSON files, got '{}'", self.file_name),
            ));
        } else if let Err(e) = globset::Glob::new(&format!("*/{}", self.file_name)) {
            errors.push(ValidationError::new(
                "fileName",
                format!("Invalid file name '{}': {e}", self.file_name),
            ));
        }

        if let Some(locales) = &self.locales {
            for (index, locale) in locales.iter().enumerate() {
                if locale.is_empty() {
                    errors.push(ValidationError::new(
                        format!("locales[{index}]"),
                        "The locale cannot be empty. Please remove this entry",
                    ));
                } else if *locale == self.source_locale {
                    errors.push(ValidationError::new(
                        format!("locales[{index}]"),
                        format!("'{locale}' is the source locale and cannot be a target"),
                    ));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            translations_dir: "src/translations".to_string(),
            source_locale: "fr".to_string(),
            file_name: "ressources.json".to_string(),
            locales: None,
        }
    }
}

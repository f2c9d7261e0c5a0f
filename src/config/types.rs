use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::TranslationPolicy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localeFiles.excludePatterns[0]")
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

/// Numbered list of validation errors, one per line.
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
pub struct CoverageSettings {
    /// Language the others are measured against.
    pub base_language: String,

    pub locale_files: LocaleFilesConfig,

    pub translation_policy: TranslationPolicy,

    /// Joins nested keys when listing untranslated entries.
    pub key_separator: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleFilesConfig {
    pub file_pattern: String,
    pub exclude_patterns: Vec<String>,
}

impl CoverageSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.base_language.trim().is_empty() {
            errors.push(ValidationError::new(
                "baseLanguage",
                "The base language cannot be empty. Example: \"en-gb\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.locale_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "localeFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/locales/**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.locale_files.file_pattern) {
            errors.push(ValidationError::new(
                "localeFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.locale_files.file_pattern),
            ));
        }

        for (index, pattern) in self.locale_files.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("localeFiles.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LocaleFilesConfig {
    fn default() -> Self {
        Self {
            file_pattern: "**/locales/**/*.json".to_string(),
            exclude_patterns: vec!["node_modules/**".to_string()],
        }
    }
}

impl Default for CoverageSettings {
    fn default() -> Self {
        Self {
            base_language: crate::locale::BASE_LANGUAGE.to_string(),
            locale_files: LocaleFilesConfig::default(),
            translation_policy: TranslationPolicy::default(),
            key_separator: ".".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = CoverageSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"translationPolicy": "presence", "keySeparator": ":"}"#;

        let settings: CoverageSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.translation_policy, eq(TranslationPolicy::Presence));
        assert_that!(settings.key_separator, eq(":"));
        assert_that!(settings.base_language, eq("en-gb"));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: CoverageSettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings.translation_policy, eq(TranslationPolicy::DistinctValue));
        assert_that!(settings.locale_files.file_pattern, eq("**/locales/**/*.json"));
        assert_that!(settings.locale_files.exclude_patterns, elements_are![eq("node_modules/**")]);
    }

    #[rstest]
    fn deserialize_rejects_unknown_policy() {
        let result = serde_json::from_str::<CoverageSettings>(r#"{"translationPolicy": "fuzzy"}"#);

        assert_that!(result, err(anything()));
    }

    #[rstest]
    fn validate_invalid_key_separator_empty() {
        let settings = CoverageSettings { key_separator: String::new(), ..CoverageSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("keySeparator")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_base_language_blank() {
        let settings =
            CoverageSettings { base_language: "  ".to_string(), ..CoverageSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("baseLanguage"))])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = CoverageSettings {
            locale_files: LocaleFilesConfig {
                exclude_patterns: vec!["node_modules/**".to_string(), "invalid[pattern".to_string()],
                ..LocaleFilesConfig::default()
            },
            ..CoverageSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("localeFiles.excludePatterns[1]")),
                field!(ValidationError.message, contains_substring("invalid[pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_file_pattern_empty() {
        let settings = CoverageSettings {
            locale_files: LocaleFilesConfig {
                file_pattern: String::new(),
                ..LocaleFilesConfig::default()
            },
            ..CoverageSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("localeFiles.filePattern"))])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = CoverageSettings {
            key_separator: String::new(),
            base_language: String::new(),
            ..CoverageSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let error_message = format!("{}", ConfigError::ValidationErrors(errors));

        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. baseLanguage"));
        assert_that!(error_message, contains_substring("2. keySeparator"));
    }
}

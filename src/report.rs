//! Coverage reports over locale files on disk.

use std::path::Path;

use crate::config::CoverageSettings;
use crate::locale::{
    CoverageReport,
    LanguageKey,
    LocaleError,
    TranslationPolicy,
    coverage_report,
    loader,
};

/// Coverage of `candidate` against `base`, both locale files.
///
/// Without a candidate every base leaf is reported missing.
///
/// # Errors
/// Either file cannot be read or parsed.
pub fn file_coverage(
    base: &Path,
    candidate: Option<&Path>,
    policy: TranslationPolicy,
    separator: &str,
) -> Result<CoverageReport, LocaleError> {
    let base_tree = loader::load_locale_file(base)?;
    let candidate_tree = candidate.map(loader::load_locale_file).transpose()?;
    Ok(coverage_report(&base_tree, candidate_tree.as_ref(), policy, separator))
}

/// Coverage of one language found in the workspace.
#[derive(Debug)]
pub struct LanguageCoverage {
    pub key: LanguageKey,
    /// Load failures are kept per language so one bad file does not hide the rest.
    pub result: Result<CoverageReport, LocaleError>,
}

/// Coverage of every non-base locale file in `workspace`, sorted by key.
///
/// Files are discovered with the configured patterns and loaded at most
/// `limit` at a time.
///
/// # Errors
/// - Invalid file patterns
/// - No locale file for the base language, or it cannot be loaded
pub async fn workspace_report(
    workspace: &Path,
    settings: &CoverageSettings,
    limit: usize,
) -> Result<Vec<LanguageCoverage>, LocaleError> {
    let files = loader::discover_locale_files(
        workspace,
        std::slice::from_ref(&settings.locale_files.file_pattern),
        &settings.locale_files.exclude_patterns,
    )?;
    let base_key = LanguageKey::new(&settings.base_language);
    let Some(base_file) = files.iter().find(|file| file.key == base_key) else {
        return Err(LocaleError::BaseNotFound {
            language: base_key.to_string(),
            workspace: workspace.to_path_buf(),
        });
    };
    let base = loader::load_locale_file(&base_file.path)?;

    let candidates = files.into_iter().filter(|file| file.key != base_key).collect();
    let loaded = loader::load_locale_files(candidates, limit).await;
    tracing::debug!(count = loaded.len(), base = %base_key, "Loaded candidate locales");

    Ok(loaded
        .into_iter()
        .map(|(file, tree)| LanguageCoverage {
            key: file.key,
            result: tree.map(|tree| {
                coverage_report(&base, Some(&tree), settings.translation_policy, &settings.key_separator)
            }),
        })
        .collect())
}

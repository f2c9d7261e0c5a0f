//! Locale trees, translation coverage and the language catalog.
/// Translation coverage calculation
mod coverage;
/// Language keys and catalog
mod language;
/// Locale file loading and discovery
pub mod loader;
/// Typed locale tree
mod tree;

use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

pub use coverage::{
    CoverageReport,
    TranslationPolicy,
    compute_coverage,
    compute_coverage_with,
    coverage_report,
};
pub use language::{
    BASE_LANGUAGE,
    Contributor,
    LANGUAGES,
    Language,
    LanguageKey,
    find_language,
};
pub use loader::{
    FsLocaleSource,
    LocaleFile,
    LocaleSource,
};
pub use tree::{
    LocaleNode,
    LocaleTree,
};

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Failed to parse locale JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Locale root must be a JSON object, found {kind}")]
    NotAnObject { kind: &'static str },

    #[error("Failed to read locale file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<LocaleError>,
    },

    #[error("Invalid locale file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("No locale file for base language '{language}' under {}", workspace.display())]
    BaseNotFound { language: String, workspace: PathBuf },
}

impl LocaleError {
    /// Attaches the file the error came from.
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        Self::InFile { path: path.to_path_buf(), source: Box::new(self) }
    }
}

//! Locale file loading and discovery.

use std::path::{
    Path,
    PathBuf,
};

use futures::StreamExt;
use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use super::{
    LanguageKey,
    LocaleError,
    LocaleTree,
};

/// Supplies parsed locale trees by language key.
pub trait LocaleSource {
    /// Loads the tree for `key`.
    ///
    /// Returns `Ok(None)` when the language has no locale file.
    ///
    /// # Errors
    /// Read or parse failures of an existing locale file.
    fn load(&self, key: &LanguageKey) -> Result<Option<LocaleTree>, LocaleError>;
}

/// Reads `<dir>/<key>.json` files, e.g. `locales/fr-fr.json`.
#[derive(Debug, Clone)]
pub struct FsLocaleSource {
    /// Directory holding the locale files.
    dir: PathBuf,
}

impl FsLocaleSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path_for(&self, key: &LanguageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_file_key()))
    }
}

impl LocaleSource for FsLocaleSource {
    fn load(&self, key: &LanguageKey) -> Result<Option<LocaleTree>, LocaleError> {
        let path = self.path_for(key);
        if !path.exists() {
            tracing::debug!("Locale file not found: {:?}", path);
            return Ok(None);
        }
        load_locale_file(&path).map(Some)
    }
}

/// Reads and parses a single locale file.
///
/// # Errors
/// - File read error
/// - JSON parse error or non-object root
pub fn load_locale_file(path: &Path) -> Result<LocaleTree, LocaleError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| LocaleError::Read { path: path.to_path_buf(), source })?;
    LocaleTree::parse(&content).map_err(|e| e.in_file(path))
}

/// Language key derived from a locale file name (`locales/fr-FR.json` → `fr-fr`).
#[must_use]
pub fn language_key_from_path(path: &Path) -> Option<LanguageKey> {
    let stem = path.file_stem()?.to_str()?;
    (!stem.is_empty()).then(|| LanguageKey::new(stem))
}

/// A locale file found in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    pub key: LanguageKey,
    pub path: PathBuf,
}

/// Compiles glob patterns into one matcher.
fn build_glob_set(patterns: &[String]) -> Result<GlobSet, LocaleError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|source| LocaleError::Pattern { pattern: pattern.clone(), source })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| LocaleError::Pattern { pattern: patterns.join(", "), source })
}

/// Finds locale files under `workspace` matching `include` but not `exclude`.
///
/// Results are sorted by language key.
///
/// # Errors
/// Invalid glob pattern.
pub fn discover_locale_files(
    workspace: &Path,
    include: &[String],
    exclude: &[String],
) -> Result<Vec<LocaleFile>, LocaleError> {
    let include_set = build_glob_set(include)?;
    let exclude_set = build_glob_set(exclude)?;

    let mut found = Vec::new();
    for result in WalkBuilder::new(workspace)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
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

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(workspace) else {
            continue;
        };
        if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
            continue;
        }
        let Some(key) = language_key_from_path(path) else {
            continue;
        };

        found.push(LocaleFile { key, path: path.to_path_buf() });
    }

    found.sort_by(|a, b| a.key.cmp(&b.key));
    tracing::debug!(workspace = %workspace.display(), count = found.len(), "Discovered locale files");
    Ok(found)
}

/// Loads many locale files concurrently, at most `limit` at a time.
///
/// The output keeps the input order. Failures are reported per file.
pub async fn load_locale_files(
    files: Vec<LocaleFile>,
    limit: usize,
) -> Vec<(LocaleFile, Result<LocaleTree, LocaleError>)> {
    futures::stream::iter(files)
        .map(|file| async move {
            let result = match tokio::fs::read_to_string(&file.path).await {
                Ok(content) => LocaleTree::parse(&content).map_err(|e| e.in_file(&file.path)),
                Err(source) => Err(LocaleError::Read { path: file.path.clone(), source }),
            };
            (file, result)
        })
        .buffered(limit.max(1))
        .collect()
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[rstest]
    fn fs_source_loads_existing_language() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "fr-fr.json", r#"{"a": "b"}"#);
        let source = FsLocaleSource::new(temp_dir.path());

        let tree = source.load(&LanguageKey::new("fr_fr")).unwrap();

        assert!(tree.is_some());
        assert_eq!(tree.unwrap().leaf_count(), 1);
    }

    #[rstest]
    fn fs_source_missing_language_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let source = FsLocaleSource::new(temp_dir.path());

        let result = source.load(&LanguageKey::new("de-de"));

        assert!(result.unwrap().is_none());
    }

    #[googletest::test]
    fn fs_source_reports_file_on_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "ja-jp.json", "{ broken");
        let source = FsLocaleSource::new(temp_dir.path());

        let result = source.load(&LanguageKey::new("ja-jp"));

        expect_that!(result, err(displays_as(contains_substring("ja-jp.json"))));
    }

    #[rstest]
    #[case("locales/fr-FR.json", Some("fr-fr"))]
    #[case("locales/en_gb.json", Some("en-gb"))]
    #[case("/", None)]
    fn language_key_from_file_name(#[case] path: &str, #[case] expected: Option<&str>) {
        let key = language_key_from_path(Path::new(path));

        assert_eq!(key.as_ref().map(LanguageKey::as_file_key), expected);
    }

    #[googletest::test]
    fn discover_respects_include_and_exclude() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/locales/list/en-gb.json", "{}");
        write(temp_dir.path(), "src/locales/list/fr-fr.json", "{}");
        write(temp_dir.path(), "node_modules/pkg/locales/de-de.json", "{}");
        write(temp_dir.path(), "src/other/ja-jp.json", "{}");

        let files = discover_locale_files(
            temp_dir.path(),
            &["**/locales/**/*.json".to_string()],
            &["node_modules/**".to_string()],
        )
        .unwrap();

        let keys: Vec<_> = files.iter().map(|f| f.key.as_file_key().to_string()).collect();
        expect_that!(keys, elements_are![eq("en-gb"), eq("fr-fr")]);
    }

    #[googletest::test]
    fn discover_rejects_invalid_pattern() {
        let temp_dir = TempDir::new().unwrap();

        let result = discover_locale_files(temp_dir.path(), &["**/{locales".to_string()], &[]);

        expect_that!(result, err(displays_as(contains_substring("**/{locales"))));
    }

    #[tokio::test]
    async fn load_locale_files_keeps_order_and_per_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.json", r#"{"x": "1"}"#);
        write(temp_dir.path(), "b.json", "[]");
        let files = vec![
            LocaleFile { key: LanguageKey::new("a"), path: temp_dir.path().join("a.json") },
            LocaleFile { key: LanguageKey::new("b"), path: temp_dir.path().join("b.json") },
            LocaleFile { key: LanguageKey::new("c"), path: temp_dir.path().join("c.json") },
        ];

        let loaded = load_locale_files(files, 2).await;

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].0.key.as_file_key(), "a");
        assert!(loaded[0].1.is_ok());
        assert!(matches!(loaded[1].1, Err(LocaleError::InFile { .. })));
        assert!(matches!(loaded[2].1, Err(LocaleError::Read { .. })));
    }
}

//! Configuration file loading.

use std::io::ErrorKind;
use std::path::Path;

use super::{
    ConfigError,
    CoverageSettings,
};

/// Name of the workspace configuration file.
pub const CONFIG_FILE_NAME: &str = ".chat-ui.json";

/// Reads `.chat-ui.json` from the workspace root.
///
/// Returns `Ok(None)` when the file does not exist. Missing fields take their
/// defaults.
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<CoverageSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);
    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "No configuration file");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let settings = serde_json::from_str(&content)?;
    tracing::debug!(path = %config_path.display(), "Loaded configuration file");
    Ok(Some(settings))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"baseLanguage": "en-us"}"#).unwrap();

        let result = load_from_workspace(temp_dir.path());

        let settings = result.unwrap().unwrap();
        assert_eq!(settings.base_language, "en-us");
        assert_eq!(settings.key_separator, ".");
        assert_eq!(settings.locale_files.exclude_patterns, vec!["node_modules/**".to_string()]);
    }

    #[rstest]
    fn missing_config_file_is_none() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.unwrap().is_none());
    }

    #[rstest]
    fn invalid_json_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[rstest]
    fn unreadable_config_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}

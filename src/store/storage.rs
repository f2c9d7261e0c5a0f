//! Persistent key/value storage for client preferences.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::{
    Mutex,
    MutexGuard,
    PoisonError,
};

use thiserror::Error;

/// Keys the client persists between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    UserToken,
    InboxDrawerSelectedIndex,
    AppLanguage,
}

impl StorageKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserToken => "userToken",
            Self::InboxDrawerSelectedIndex => "inboxDrawerSelectedIndex",
            Self::AppLanguage => "appLanguage",
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file is not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key/value store.
///
/// Numbers are stored as their decimal text.
pub trait KeyValueStore {
    fn get_string(&self, key: StorageKey) -> Option<String>;

    /// # Errors
    /// The backing medium could not be written.
    fn set_string(&self, key: StorageKey, value: &str) -> Result<(), StorageError>;

    /// # Errors
    /// The backing medium could not be written.
    fn remove(&self, key: StorageKey) -> Result<(), StorageError>;

    /// Stored number, or `default` when absent or not a number.
    fn get_number(&self, key: StorageKey, default: i64) -> i64 {
        self.get_string(key).and_then(|value| value.trim().parse().ok()).unwrap_or(default)
    }

    /// # Errors
    /// The backing medium could not be written.
    fn set_number(&self, key: StorageKey, value: i64) -> Result<(), StorageError> {
        self.set_string(key, &value.to_string())
    }
}

/// Locks `mutex`, recovering the data of a poisoned lock.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored strings by key.
    values: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: StorageKey) -> Option<String> {
        lock(&self.values).get(&key).cloned()
    }

    fn set_string(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        lock(&self.values).insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        lock(&self.values).remove(&key);
        Ok(())
    }
}

/// Store backed by a JSON object file, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    /// JSON file backing the store.
    path: PathBuf,
    /// Mirror of the file contents.
    values: Mutex<serde_json::Map<String, serde_json::Value>>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file starts empty.
    ///
    /// # Errors
    /// - The file exists but cannot be read
    /// - The file is not a JSON object
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|source| StorageError::Io { path: path.clone(), source })?;
            serde_json::from_str(&content)?
        } else {
            tracing::debug!("Storage file not found, starting empty: {:?}", path);
            serde_json::Map::new()
        };
        Ok(Self { path, values: Mutex::new(values) })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `values` to the file, creating parent directories.
    fn persist(&self, values: &serde_json::Map<String, serde_json::Value>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(values)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| StorageError::Io { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(&self.path, content)
            .map_err(|source| StorageError::Io { path: self.path.clone(), source })
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: StorageKey) -> Option<String> {
        match lock(&self.values).get(key.as_str())? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn set_string(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        let mut values = lock(&self.values);
        let mut next = values.clone();
        next.insert(key.as_str().to_string(), serde_json::Value::String(value.to_string()));
        self.persist(&next)?;
        *values = next;
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        let mut values = lock(&self.values);
        if !values.contains_key(key.as_str()) {
            return Ok(());
        }
        let mut next = values.clone();
        next.remove(key.as_str());
        self.persist(&next)?;
        *values = next;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[googletest::test]
    fn memory_store_numbers_fall_back_to_default() {
        let store = MemoryStore::new();

        expect_that!(store.get_number(StorageKey::InboxDrawerSelectedIndex, 0), eq(0));
        store.set_string(StorageKey::InboxDrawerSelectedIndex, "not a number").unwrap();
        expect_that!(store.get_number(StorageKey::InboxDrawerSelectedIndex, 7), eq(7));
        store.set_number(StorageKey::InboxDrawerSelectedIndex, 1).unwrap();
        expect_that!(store.get_number(StorageKey::InboxDrawerSelectedIndex, 0), eq(1));
    }

    #[googletest::test]
    fn memory_store_remove() {
        let store = MemoryStore::new();
        store.set_string(StorageKey::UserToken, "token").unwrap();

        store.remove(StorageKey::UserToken).unwrap();

        expect_that!(store.get_string(StorageKey::UserToken), none());
    }

    #[rstest]
    fn file_store_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state/storage.json");

        let store = FileStore::open(&path).unwrap();
        store.set_string(StorageKey::AppLanguage, "fr_fr").unwrap();
        store.set_number(StorageKey::InboxDrawerSelectedIndex, 1).unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_string(StorageKey::AppLanguage).as_deref(), Some("fr_fr"));
        assert_eq!(reopened.get_number(StorageKey::InboxDrawerSelectedIndex, 0), 1);
    }

    #[rstest]
    fn file_store_reads_non_string_values_as_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, r#"{"inboxDrawerSelectedIndex": 1}"#).unwrap();

        let store = FileStore::open(&path).unwrap();

        assert_eq!(store.get_number(StorageKey::InboxDrawerSelectedIndex, 0), 1);
    }

    #[googletest::test]
    fn file_store_failed_write_keeps_previous_values() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("blocker"), "").unwrap();
        let store = FileStore::open(temp_dir.path().join("blocker/storage.json")).unwrap();

        let result = store.set_string(StorageKey::AppLanguage, "fr_fr");

        expect_that!(result, err(anything()));
        expect_that!(store.get_string(StorageKey::AppLanguage), none());
    }

    #[googletest::test]
    fn file_store_failed_remove_keeps_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let store = FileStore::open(&path).unwrap();
        store.set_string(StorageKey::UserToken, "token").unwrap();
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let result = store.remove(StorageKey::UserToken);

        expect_that!(result, err(anything()));
        let token = store.get_string(StorageKey::UserToken);
        expect_that!(token.as_deref(), some(eq("token")));
    }

    #[googletest::test]
    fn file_store_rejects_non_object_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "[1, 2]").unwrap();

        expect_that!(FileStore::open(&path), err(anything()));
    }
}

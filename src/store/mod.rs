//! Client state: observable cells, persisted preferences and the view header.
/// Observable state cell
mod signal;
/// Key/value preference storage
mod storage;

pub use signal::Signal;
pub use storage::{
    FileStore,
    KeyValueStore,
    MemoryStore,
    StorageError,
    StorageKey,
};

/// Title and icon shown in the application header for the active view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub icon_name: String,
}

impl HeaderInfo {
    #[must_use]
    pub fn new(title: impl Into<String>, icon_name: impl Into<String>) -> Self {
        Self { title: title.into(), icon_name: icon_name.into() }
    }
}

//! View state for the client screens.
//!
//! Each view owns its state in [`Signal`](crate::store::Signal)s and exposes
//! the operations its event handlers need. Rendering is left to the caller.
/// Developer settings page
pub mod developer_settings;
/// Inbox drawer
pub mod inbox;
/// Bot invitation page
pub mod invite_bot;
/// Language settings page
pub mod language_settings;
/// Server settings header
pub mod server_settings_header;

use thiserror::Error;

use crate::locale::LocaleError;
use crate::store::StorageError;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One step of a settings page breadcrumb trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breadcrumb {
    pub href: Option<&'static str>,
    pub icon: Option<&'static str>,
    /// Translation key of the label.
    pub title: &'static str,
}

impl Breadcrumb {
    /// Link back to the dashboard.
    #[must_use]
    pub const fn home() -> Self {
        Self { href: Some(crate::routes::APP_HOME), icon: Some("home"), title: "dashboard.title" }
    }

    #[must_use]
    pub const fn current(title: &'static str) -> Self {
        Self { href: None, icon: None, title }
    }
}

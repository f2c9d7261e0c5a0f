//! Developer settings page.

use super::Breadcrumb;
use crate::routes;
use crate::store::{
    HeaderInfo,
    Signal,
};

pub const API_DOCS_URL: &str = "https://docs.nerimity.com";

/// A clickable row linking elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsBlock {
    pub href: &'static str,
    /// Opens in a new browser tab.
    pub external: bool,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
    pub trailing_icon: &'static str,
}

pub const SETTINGS_BLOCKS: [SettingsBlock; 2] = [
    SettingsBlock {
        href: routes::DEVELOPER_APPLICATIONS,
        external: false,
        icon: "extension",
        label: "Applications",
        description: Some("Create Nerimity Bots."),
        trailing_icon: "keyboard_arrow_right",
    },
    SettingsBlock {
        href: API_DOCS_URL,
        external: true,
        icon: "article",
        label: "API Documentation (incomplete)",
        description: None,
        trailing_icon: "open_in_new",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeveloperSettings;

impl DeveloperSettings {
    /// Publishes the page header.
    #[must_use]
    pub fn mount(header: &Signal<HeaderInfo>) -> Self {
        header.set_if_changed(HeaderInfo::new("Settings - Developer", "settings"));
        Self
    }

    #[must_use]
    pub const fn breadcrumbs(&self) -> [Breadcrumb; 2] {
        [Breadcrumb::home(), Breadcrumb::current("settings.drawer.developer")]
    }

    #[must_use]
    pub const fn blocks(&self) -> &'static [SettingsBlock] {
        &SETTINGS_BLOCKS
    }
}

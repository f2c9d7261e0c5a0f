//! Holds the active coverage settings.

use std::path::Path;

use super::{
    ConfigError,
    CoverageSettings,
    loader,
};

/// Validated settings for the current workspace.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Settings in effect; defaults until a workspace loads successfully.
    current_settings: CoverageSettings,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates the workspace settings.
    ///
    /// Without a workspace, or without a configuration file, defaults apply.
    /// On error the previous settings stay active.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, workspace_root: Option<&Path>) -> Result<(), ConfigError> {
        let settings = match workspace_root {
            Some(root) => loader::load_from_workspace(root)?.unwrap_or_default(),
            None => CoverageSettings::default(),
        };
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!(?workspace_root, settings = ?settings, "Settings loaded");
        self.current_settings = settings;
        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &CoverageSettings {
        &self.current_settings
    }
}

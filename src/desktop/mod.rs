//! Desktop shell integration.
//!
//! The shell injects a [`WindowApi`] when the client runs as a desktop app.
//! In a browser there is no bridge and every helper here does nothing.
/// Host function surface
mod bridge;
/// Spellcheck suggestion state
mod spellcheck;
/// Shell payload types
mod types;

pub use bridge::{
    ActivityCallback,
    BridgeError,
    GlobalKeyCallback,
    RpcCallback,
    SpellcheckCallback,
    WindowApi,
};
pub use spellcheck::SpellcheckState;
pub use types::{
    ActiveWindow,
    CaptureSource,
    GlobalKeyEvent,
    KeyEvent,
    KeyState,
    Program,
    ProgramWithExtras,
    RpcActivity,
};

/// Optional desktop bridge plus the state fed by it.
#[derive(Debug)]
pub struct DesktopIntegration<B> {
    /// `None` outside the desktop app.
    bridge: Option<B>,
    /// Suggestions pushed by the bridge.
    spellcheck: SpellcheckState,
}

impl<B: WindowApi> DesktopIntegration<B> {
    #[must_use]
    pub fn new(bridge: Option<B>) -> Self {
        let spellcheck = SpellcheckState::new();
        if let Some(bridge) = &bridge {
            spellcheck.attach(bridge);
        } else {
            tracing::debug!("No desktop bridge, running as web client");
        }
        Self { bridge, spellcheck }
    }

    #[must_use]
    pub const fn is_desktop(&self) -> bool {
        self.bridge.is_some()
    }

    #[must_use]
    pub const fn bridge(&self) -> Option<&B> {
        self.bridge.as_ref()
    }

    #[must_use]
    pub const fn spellcheck(&self) -> &SpellcheckState {
        &self.spellcheck
    }

    pub fn minimize(&self) {
        if let Some(bridge) = &self.bridge {
            bridge.minimize();
        }
    }

    pub fn toggle_maximize(&self) {
        if let Some(bridge) = &self.bridge {
            bridge.toggle_maximize();
        }
    }

    pub fn close(&self) {
        if let Some(bridge) = &self.bridge {
            bridge.close();
        }
    }

    pub fn copy_text(&self, text: &str) {
        if let Some(bridge) = &self.bridge {
            bridge.clipboard_copy(text);
        }
    }

    /// Applies a suggestion and clears the suggestion list.
    pub fn replace_misspelling(&self, word: &str) {
        if let Some(bridge) = &self.bridge {
            bridge.replace_misspelling(word);
        }
        self.spellcheck.clear();
    }

    /// Autostart setting; `false` outside the desktop app.
    ///
    /// # Errors
    /// The shell call failed.
    pub async fn autostart(&self) -> Result<bool, BridgeError> {
        match &self.bridge {
            Some(bridge) => bridge.autostart().await,
            None => Ok(false),
        }
    }

    /// Screen sharing sources; empty outside the desktop app.
    ///
    /// # Errors
    /// The shell call failed.
    pub async fn capture_sources(&self) -> Result<Vec<CaptureSource>, BridgeError> {
        match &self.bridge {
            Some(bridge) => bridge.desktop_capture_sources().await,
            None => Ok(Vec::new()),
        }
    }

    /// Starts the global key listener and forwards events to `callback`.
    ///
    /// Returns `false` when there is no bridge to listen with.
    pub fn listen_global_keys(&self, callback: GlobalKeyCallback) -> bool {
        let Some(bridge) = &self.bridge else {
            return false;
        };
        bridge.on_global_key(callback);
        bridge.start_global_key_listener();
        true
    }
}

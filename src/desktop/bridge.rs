//! Host functions exposed by the desktop shell.

use std::future::Future;

use thiserror::Error;

use super::types::{
    ActiveWindow,
    CaptureSource,
    GlobalKeyEvent,
    Program,
    RpcActivity,
};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Desktop shell call '{call}' failed: {message}")]
    Call { call: &'static str, message: String },

    #[error("Unexpected payload from desktop shell: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type SpellcheckCallback = Box<dyn Fn(Vec<String>) + Send + Sync>;
pub type ActivityCallback = Box<dyn Fn(Option<ActiveWindow>) + Send + Sync>;
pub type RpcCallback = Box<dyn Fn(Option<RpcActivity>) + Send + Sync>;
pub type GlobalKeyCallback = Box<dyn Fn(GlobalKeyEvent) + Send + Sync>;

/// Window and system functions of the desktop shell.
///
/// Only available when running inside the desktop app; see
/// [`DesktopIntegration`](super::DesktopIntegration).
pub trait WindowApi: Send + Sync {
    fn minimize(&self);
    fn toggle_maximize(&self);
    fn close(&self);
    fn relaunch_app(&self);

    fn autostart(&self) -> impl Future<Output = Result<bool, BridgeError>> + Send;
    fn set_autostart(&self, value: bool);
    fn autostart_minimized(&self) -> impl Future<Output = Result<bool, BridgeError>> + Send;
    fn set_autostart_minimized(&self, value: bool);

    fn hardware_acceleration_disabled(&self)
    -> impl Future<Output = Result<bool, BridgeError>> + Send;
    fn set_hardware_acceleration_disabled(&self, value: bool);
    fn custom_titlebar_disabled(&self) -> impl Future<Output = Result<bool, BridgeError>> + Send;
    fn set_custom_titlebar_disabled(&self, value: bool);

    fn set_notification(&self, value: bool);

    fn desktop_capture_sources(
        &self,
    ) -> impl Future<Output = Result<Vec<CaptureSource>, BridgeError>> + Send;
    fn set_desktop_capture_source_id(
        &self,
        source_id: &str,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;

    /// Running programs, minus `ignored`.
    fn running_programs(
        &self,
        ignored: &[Program],
    ) -> impl Future<Output = Result<Vec<Program>, BridgeError>> + Send;
    fn restart_activity_status(&self, listen_to: &[Program]);
    /// `None` when no tracked program is focused.
    fn on_activity_status_changed(&self, callback: ActivityCallback);

    fn restart_rpc_server(&self);
    /// `None` when the rich presence was cleared.
    fn on_rpc_changed(&self, callback: RpcCallback);

    fn on_spellcheck(&self, callback: SpellcheckCallback);
    fn replace_misspelling(&self, word: &str);

    fn clipboard_paste(&self);
    fn clipboard_copy(&self, text: &str);
    fn clipboard_cut(&self);

    fn start_global_key_listener(&self);
    fn stop_global_key_listener(&self);
    fn on_global_key(&self, callback: GlobalKeyCallback);
}

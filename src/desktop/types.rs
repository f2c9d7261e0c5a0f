//! Payloads exchanged with the desktop shell.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// A screen or window offered for screen sharing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureSource {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

/// A program the activity status can track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    pub filename: String,
}

/// A tracked program with the verb shown next to it ("Playing", ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramWithExtras {
    #[serde(flatten)]
    pub program: Program,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// Rich presence reported by a local application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcActivity {
    pub name: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Unix milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<i64>,
}

/// Focused window reported by the activity tracker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveWindow {
    pub filename: String,
    /// Unix milliseconds.
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyState {
    Down,
    Up,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    pub name: String,
    pub v_key: u32,
    pub state: KeyState,
}

/// Key press seen by the global key listener.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GlobalKeyEvent {
    pub event: KeyEvent,
    /// Keys held down at the time of the event.
    pub down: HashMap<String, bool>,
}

impl GlobalKeyEvent {
    /// Names of the keys currently held.
    pub fn held_keys(&self) -> impl Iterator<Item = &str> {
        self.down.iter().filter(|(_, held)| **held).map(|(name, _)| name.as_str())
    }
}

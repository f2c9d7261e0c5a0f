//! Core types used throughout the project.
//!
//! These mirror the raw payloads the chat API returns; field names follow the
//! API's camelCase JSON.

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    /// Direct-message channel with oneself ("saved notes"), once opened.
    #[serde(default)]
    pub inbox_channel_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub hex_color: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    /// `None` for direct-message channels.
    #[serde(default)]
    pub server_id: Option<String>,
    #[serde(default)]
    pub recipient: Option<User>,
    #[serde(default)]
    pub last_messaged_at: Option<DateTime<Utc>>,
}

impl Channel {
    #[must_use]
    pub const fn is_direct_message(&self) -> bool {
        self.server_id.is_none()
    }
}

/// Relationship state with another user, encoded as an integer by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FriendStatus {
    Sent,
    /// Incoming request awaiting an answer.
    Pending,
    Friends,
    Blocked,
}

impl TryFrom<u8> for FriendStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sent),
            1 => Ok(Self::Pending),
            2 => Ok(Self::Friends),
            3 => Ok(Self::Blocked),
            other => Err(format!("unknown friend status {other}")),
        }
    }
}

impl From<FriendStatus> for u8 {
    fn from(value: FriendStatus) -> Self {
        match value {
            FriendStatus::Sent => 0,
            FriendStatus::Pending => 1,
            FriendStatus::Friends => 2,
            FriendStatus::Blocked => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub recipient: User,
    pub status: FriendStatus,
}

/// Unread mention of the logged in user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub channel_id: String,
    pub user_id: String,
}

/// A direct-message conversation listed in the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxItem {
    pub channel: Channel,
}

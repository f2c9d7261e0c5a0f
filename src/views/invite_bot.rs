//! Bot invitation page.

use std::future::Future;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::permissions::{
    Permission,
    ROLE_PERMISSIONS,
    has_bit,
    toggle_permission,
};
use crate::routes;
use crate::store::{
    KeyValueStore,
    Signal,
    StorageKey,
};
use crate::types::User;

/// Message shown once the server accepted the bot.
pub const BOT_ADDED_MESSAGE: &str = "Bot added to the server.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InviteError {
    /// Rejected by the server, with its message.
    #[error("{0}")]
    Rejected(String),

    #[error("Request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorAccount {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub creator_account: CreatorAccount,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotUser {
    pub id: String,
    pub username: String,
    pub application: Application,
}

/// Server the logged in user may add the bot to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationBot {
    pub bot: BotUser,
    pub servers: Vec<ServerOption>,
}

/// Remote calls the invitation page makes.
pub trait BotInviteService {
    /// Fetches the bot and the servers it can be added to.
    fn application_bot(
        &self,
        app_id: &str,
    ) -> impl Future<Output = Result<ApplicationBot, InviteError>> + Send;

    fn invite_bot(
        &self,
        server_id: &str,
        app_id: &str,
        permissions: u64,
    ) -> impl Future<Output = Result<(), InviteError>> + Send;
}

/// Reads the `perms` query parameter.
///
/// Follows integer-prefix parsing: leading digits are used and anything after
/// them is ignored. A missing value is `0`; a value without leading digits is
/// `0` as well, with a warning.
#[must_use]
pub fn parse_permissions_query(perms: Option<&str>) -> u64 {
    let Some(raw) = perms else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let digits_end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
    match trimmed.get(..digits_end).and_then(|digits| digits.parse().ok()) {
        Some(mask) => mask,
        None => {
            tracing::warn!(perms = raw, "Ignoring unparsable permissions query");
            0
        }
    }
}

/// Login route to redirect to when nobody is logged in.
///
/// `location` is the current path and query, restored after logging in.
#[must_use]
pub fn require_login(storage: &impl KeyValueStore, location: &str) -> Option<String> {
    storage.get_string(StorageKey::UserToken).is_none().then(|| routes::login(location))
}

/// Checkbox row of the permission list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionRow {
    pub permission: &'static Permission,
    pub checked: bool,
}

/// Outcome of opening the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    Loaded,
    /// Not logged in; navigate here instead, replacing the history entry.
    Redirect(String),
}

/// State behind the bot invitation page.
#[derive(Debug)]
pub struct InviteBotFlow {
    /// Application whose bot is invited.
    app_id: String,
    /// Loaded bot, `None` until mounted.
    bot: Signal<Option<BotUser>>,
    /// Servers the bot can join.
    servers: Signal<Vec<ServerOption>>,
    /// Permission mask granted to the bot.
    permissions: Signal<u64>,
    /// Server picked in the selector.
    server_id: Signal<Option<String>>,
    /// Set while an invitation is in flight.
    request_sent: Signal<bool>,
    /// Message of the last failure.
    error: Signal<Option<String>>,
    /// Shown after the bot was added.
    success_message: Signal<Option<String>>,
}

impl InviteBotFlow {
    #[must_use]
    pub fn new(app_id: impl Into<String>, permissions: u64) -> Self {
        Self {
            app_id: app_id.into(),
            bot: Signal::new(None),
            servers: Signal::new(Vec::new()),
            permissions: Signal::new(permissions),
            server_id: Signal::new(None),
            request_sent: Signal::new(false),
            error: Signal::new(None),
            success_message: Signal::new(None),
        }
    }

    /// Loads the bot, or asks for a login first.
    pub async fn mount(
        &self,
        storage: &impl KeyValueStore,
        service: &impl BotInviteService,
        location: &str,
    ) -> MountOutcome {
        if let Some(route) = require_login(storage, location) {
            return MountOutcome::Redirect(route);
        }

        match service.application_bot(&self.app_id).await {
            Ok(ApplicationBot { bot, servers }) => {
                tracing::debug!(app_id = %self.app_id, servers = servers.len(), "Loaded bot");
                self.bot.set(Some(bot));
                self.servers.set(servers);
            }
            Err(err) => {
                tracing::warn!(app_id = %self.app_id, %err, "Failed to load bot");
                self.error.set(Some(err.to_string()));
            }
        }
        MountOutcome::Loaded
    }

    pub fn toggle(&self, bit: u64) {
        self.permissions.update(|mask| *mask = toggle_permission(*mask, bit));
    }

    #[must_use]
    pub fn is_checked(&self, bit: u64) -> bool {
        has_bit(self.permissions.get(), bit)
    }

    #[must_use]
    pub fn permission_rows(&self) -> Vec<PermissionRow> {
        let mask = self.permissions.get();
        ROLE_PERMISSIONS
            .iter()
            .map(|permission| PermissionRow { permission, checked: has_bit(mask, permission.bit) })
            .collect()
    }

    pub fn select_server(&self, server_id: impl Into<String>) {
        self.server_id.set(Some(server_id.into()));
    }

    /// Sends the invitation for the selected server.
    ///
    /// Without a selected server an error is shown instead. A second call
    /// while a request is in flight does nothing.
    pub async fn add_bot(&self, service: &impl BotInviteService) {
        self.error.set(None);
        self.success_message.set(None);

        let Some(server_id) = self.server_id.get() else {
            self.error.set(Some("botInvite.serverSelect".to_string()));
            return;
        };
        if self.request_sent.set(true) {
            return;
        }
        let _in_flight = InFlight(&self.request_sent);

        let permissions = self.permissions.get();
        tracing::debug!(app_id = %self.app_id, %server_id, permissions, "Inviting bot");
        match service.invite_bot(&server_id, &self.app_id, permissions).await {
            Ok(()) => {
                self.success_message.set(Some(BOT_ADDED_MESSAGE.to_string()));
            }
            Err(err) => {
                self.error.set(Some(err.to_string()));
            }
        }
    }

    #[must_use]
    pub const fn bot(&self) -> &Signal<Option<BotUser>> {
        &self.bot
    }

    #[must_use]
    pub const fn servers(&self) -> &Signal<Vec<ServerOption>> {
        &self.servers
    }

    #[must_use]
    pub const fn permissions(&self) -> &Signal<u64> {
        &self.permissions
    }

    #[must_use]
    pub const fn error(&self) -> &Signal<Option<String>> {
        &self.error
    }

    #[must_use]
    pub const fn success_message(&self) -> &Signal<Option<String>> {
        &self.success_message
    }

    #[must_use]
    pub fn is_request_in_flight(&self) -> bool {
        self.request_sent.get()
    }
}

/// Clears the in-flight flag when the request ends or is cancelled.
struct InFlight<'a>(&'a Signal<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

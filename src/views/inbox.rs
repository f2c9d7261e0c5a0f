//! Inbox drawer: tab selection, tab badges and the direct-message user list.

use std::collections::{
    HashMap,
    HashSet,
};

use crate::store::{
    KeyValueStore,
    Signal,
    StorageError,
    StorageKey,
};
use crate::types::{
    Channel,
    Friend,
    FriendStatus,
    InboxItem,
    Mention,
    User,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InboxTab {
    #[default]
    Inbox,
    Friends,
}

impl InboxTab {
    #[must_use]
    pub const fn index(self) -> i64 {
        match self {
            Self::Inbox => 0,
            Self::Friends => 1,
        }
    }

    /// Unknown indices fall back to the inbox tab.
    #[must_use]
    pub const fn from_index(index: i64) -> Self {
        match index {
            1 => Self::Friends,
            _ => Self::Inbox,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Friends => "Friends",
        }
    }

    #[must_use]
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Friends => "group",
        }
    }
}

/// A tab button in the drawer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderItem {
    pub tab: InboxTab,
    pub selected: bool,
    /// Badge count; `None` hides the badge.
    pub notification_count: Option<usize>,
}

/// Incoming friend requests awaiting an answer.
#[must_use]
pub fn friend_request_count(friends: &[Friend]) -> usize {
    friends.iter().filter(|friend| friend.status == FriendStatus::Pending).count()
}

/// Users listed in the inbox tab.
///
/// Authors of mentions outside servers come first, followed by the
/// recipients of inbox conversations, most recently messaged first. Channels
/// that never had a message sort last. Each user appears once. A mention in a
/// channel that is not loaded counts as a direct-message mention.
#[must_use]
pub fn inbox_users(
    mentions: &[Mention],
    channels: &HashMap<String, Channel>,
    users: &HashMap<String, User>,
    inbox: &[InboxItem],
) -> Vec<User> {
    let mentioned = mentions
        .iter()
        .filter(|mention| {
            !channels.get(&mention.channel_id).is_some_and(|channel| channel.server_id.is_some())
        })
        .filter_map(|mention| users.get(&mention.user_id));

    let mut conversations: Vec<&InboxItem> = inbox.iter().collect();
    conversations.sort_by(|a, b| {
        // `None < Some`, so reversing puts missing timestamps last.
        b.channel.last_messaged_at.cmp(&a.channel.last_messaged_at)
    });
    let recipients = conversations.into_iter().filter_map(|item| item.channel.recipient.as_ref());

    let mut seen = HashSet::new();
    mentioned.chain(recipients).filter(|user| seen.insert(user.id.as_str())).cloned().collect()
}

/// Whether the open channel is the user's own notes channel.
#[must_use]
pub fn is_saved_notes_selected(user: Option<&User>, channel_id: Option<&str>) -> bool {
    match (user.and_then(|u| u.inbox_channel_id.as_deref()), channel_id) {
        (Some(inbox_channel), Some(open)) => inbox_channel == open,
        _ => false,
    }
}

/// State behind the inbox drawer.
#[derive(Debug)]
pub struct InboxDrawer<K: KeyValueStore> {
    /// Remembers the selected tab.
    storage: K,
    /// Tab currently shown.
    selected: Signal<InboxTab>,
}

impl<K: KeyValueStore> InboxDrawer<K> {
    /// Restores the last selected tab.
    #[must_use]
    pub fn new(storage: K) -> Self {
        let tab = InboxTab::from_index(storage.get_number(StorageKey::InboxDrawerSelectedIndex, 0));
        Self { storage, selected: Signal::new(tab) }
    }

    /// Selects `tab` and remembers it for the next session.
    ///
    /// # Errors
    /// Storage write failure. The selection is left unchanged.
    pub fn select_tab(&self, tab: InboxTab) -> Result<(), StorageError> {
        self.storage.set_number(StorageKey::InboxDrawerSelectedIndex, tab.index())?;
        self.selected.set_if_changed(tab);
        Ok(())
    }

    #[must_use]
    pub const fn selected(&self) -> &Signal<InboxTab> {
        &self.selected
    }

    /// Header tabs with their badges.
    #[must_use]
    pub fn header_items(&self, inbox_notifications: usize, friends: &[Friend]) -> [HeaderItem; 2] {
        let selected = self.selected.get();
        let item = |tab: InboxTab, count: usize| HeaderItem {
            tab,
            selected: selected == tab,
            notification_count: (count > 0).then_some(count),
        };
        [
            item(InboxTab::Inbox, inbox_notifications),
            item(InboxTab::Friends, friend_request_count(friends)),
        ]
    }
}

//! Role permission catalog.

use thiserror::Error;

use super::{
    has_bit,
    toggle_permission,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown permission '{0}'")]
pub struct UnknownPermission(pub String);

/// A named role permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permission {
    /// Catalog identifier, e.g. `MANAGE_ROLES`.
    pub id: &'static str,
    /// Translation key of the label shown next to the checkbox.
    pub name: &'static str,
    pub bit: u64,
}

impl Permission {
    /// Looks a permission up by identifier, case-insensitively.
    #[must_use]
    pub fn by_id(id: &str) -> Option<&'static Self> {
        ROLE_PERMISSIONS.iter().find(|permission| permission.id.eq_ignore_ascii_case(id))
    }
}

pub const ADMIN: Permission =
    Permission { id: "ADMIN", name: "servers.settings.role.permissions.admin", bit: 1 };
pub const SEND_MESSAGE: Permission =
    Permission { id: "SEND_MESSAGE", name: "servers.settings.role.permissions.sendMessage", bit: 2 };
pub const MANAGE_ROLES: Permission =
    Permission { id: "MANAGE_ROLES", name: "servers.settings.role.permissions.manageRoles", bit: 4 };
pub const MANAGE_CHANNELS: Permission = Permission {
    id: "MANAGE_CHANNELS",
    name: "servers.settings.role.permissions.manageChannels",
    bit: 8,
};
pub const KICK: Permission =
    Permission { id: "KICK", name: "servers.settings.role.permissions.kick", bit: 16 };
pub const BAN: Permission =
    Permission { id: "BAN", name: "servers.settings.role.permissions.ban", bit: 32 };
pub const MENTION_EVERYONE: Permission = Permission {
    id: "MENTION_EVERYONE",
    name: "servers.settings.role.permissions.mentionEveryone",
    bit: 64,
};
pub const NICKNAME_MEMBER: Permission = Permission {
    id: "NICKNAME_MEMBER",
    name: "servers.settings.role.permissions.nicknameMember",
    bit: 128,
};
pub const MENTION_ROLES: Permission = Permission {
    id: "MENTION_ROLES",
    name: "servers.settings.role.permissions.mentionRoles",
    bit: 256,
};

/// Permissions a role or bot invite can grant, in display order.
pub const ROLE_PERMISSIONS: &[Permission] = &[
    ADMIN,
    SEND_MESSAGE,
    MANAGE_ROLES,
    MANAGE_CHANNELS,
    KICK,
    BAN,
    MENTION_EVERYONE,
    NICKNAME_MEMBER,
    MENTION_ROLES,
];

/// Catalog entries whose bit is set in `mask`.
pub fn granted(mask: u64) -> impl Iterator<Item = &'static Permission> {
    ROLE_PERMISSIONS.iter().filter(move |permission| has_bit(mask, permission.bit))
}

/// Toggles each named permission on `mask`, in order.
///
/// # Errors
/// A name is not in the catalog; nothing is applied.
pub fn toggle_by_ids<S: AsRef<str>>(mask: u64, ids: &[S]) -> Result<u64, UnknownPermission> {
    ids.iter().try_fold(mask, |mask, id| {
        let id = id.as_ref();
        let permission = Permission::by_id(id).ok_or_else(|| UnknownPermission(id.to_string()))?;
        Ok(toggle_permission(mask, permission.bit))
    })
}

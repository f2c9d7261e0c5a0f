//! Role permission bitmasks.
/// Bitmask operations
mod bitwise;
/// Named role permissions
mod catalog;

pub use bitwise::{
    add_bit,
    has_bit,
    remove_bit,
    toggle_permission,
};
pub use catalog::{
    ADMIN,
    BAN,
    KICK,
    MANAGE_CHANNELS,
    MANAGE_ROLES,
    MENTION_EVERYONE,
    MENTION_ROLES,
    NICKNAME_MEMBER,
    Permission,
    ROLE_PERMISSIONS,
    SEND_MESSAGE,
    UnknownPermission,
    granted,
    toggle_by_ids,
};

//! Header shown above the server settings panes.

use crate::routes;
use crate::types::Server;

/// Window width at or below which the compact avatar is used.
pub const COMPACT_WIDTH: u32 = 1100;

/// Unsaved edits shown in the header before they are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderPreview {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
}

/// Translation key with its interpolated count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountLabel {
    pub key: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettingsHeader {
    pub name: String,
    pub verified: bool,
    pub avatar_size: u32,
    /// Preview avatar, or `None` to use the server's own.
    pub avatar_url: Option<String>,
    /// Preview banner, or `None` to use the server's own.
    pub banner_url: Option<String>,
    pub hex_color: Option<String>,
    pub member_count: CountLabel,
    pub edit_label: &'static str,
    pub edit_href: String,
}

impl ServerSettingsHeader {
    #[must_use]
    pub fn new(server: &Server, member_count: usize, preview: &HeaderPreview, window_width: u32) -> Self {
        let non_empty = |value: &Option<String>| value.as_ref().filter(|v| !v.is_empty()).cloned();

        Self {
            name: non_empty(&preview.name).unwrap_or_else(|| server.name.clone()),
            verified: server.verified,
            avatar_size: avatar_size(window_width),
            avatar_url: non_empty(&preview.avatar),
            banner_url: non_empty(&preview.banner).or_else(|| server.banner.clone()),
            hex_color: server.hex_color.clone(),
            member_count: CountLabel {
                key: "servers.settings.header.serverMemberCount",
                count: member_count,
            },
            edit_label: "servers.settings.header.editServer",
            edit_href: routes::server_settings_general(&server.id),
        }
    }
}

#[must_use]
pub const fn avatar_size(window_width: u32) -> u32 {
    if window_width <= COMPACT_WIDTH { 70 } else { 100 }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn server() -> Server {
        Server {
            id: "42".into(),
            name: "Rustaceans".into(),
            verified: true,
            hex_color: Some("#ff8800".into()),
            avatar: Some("avatar.png".into()),
            banner: Some("banner.png".into()),
        }
    }

    #[rstest]
    #[case(800, 70)]
    #[case(1100, 70)]
    #[case(1101, 100)]
    #[case(1920, 100)]
    fn avatar_shrinks_on_narrow_windows(#[case] width: u32, #[case] expected: u32) {
        assert_eq!(avatar_size(width), expected);
    }

    #[test]
    fn without_preview_uses_server_details() {
        let header = ServerSettingsHeader::new(&server(), 3, &HeaderPreview::default(), 1400);

        assert_eq!(header.name, "Rustaceans");
        assert!(header.verified);
        assert_eq!(header.avatar_size, 100);
        assert_eq!(header.avatar_url, None);
        assert_eq!(header.banner_url.as_deref(), Some("banner.png"));
        assert_eq!(
            header.member_count,
            CountLabel { key: "servers.settings.header.serverMemberCount", count: 3 }
        );
        assert_eq!(header.edit_href, "/app/servers/42/settings/general");
    }

    #[test]
    fn preview_overrides_name_and_images() {
        let preview = HeaderPreview {
            name: Some("Renamed".into()),
            avatar: Some("new-avatar.png".into()),
            banner: Some("new-banner.png".into()),
        };

        let header = ServerSettingsHeader::new(&server(), 0, &preview, 900);

        assert_eq!(header.name, "Renamed");
        assert_eq!(header.avatar_url.as_deref(), Some("new-avatar.png"));
        assert_eq!(header.banner_url.as_deref(), Some("new-banner.png"));
        assert_eq!(header.avatar_size, 70);
    }

    #[test]
    fn empty_preview_name_is_ignored() {
        let preview = HeaderPreview { name: Some(String::new()), ..HeaderPreview::default() };

        let header = ServerSettingsHeader::new(&server(), 0, &preview, 900);

        assert_eq!(header.name, "Rustaceans");
    }
}

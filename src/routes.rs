//! In-app route paths.

/// Dashboard, the first breadcrumb of every settings page.
pub const APP_HOME: &str = "/app";

/// Login page that returns to `redirect_to` afterwards.
#[must_use]
pub fn login(redirect_to: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(redirect_to.as_bytes()).collect();
    format!("/login?redirect-to={encoded}")
}

#[must_use]
pub fn server_settings_general(server_id: &str) -> String {
    format!("/app/servers/{server_id}/settings/general")
}

/// Developer applications list, relative to the developer settings page.
pub const DEVELOPER_APPLICATIONS: &str = "./applications";

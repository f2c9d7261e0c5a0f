//! chat-ui-core
//!
//! UI-layer logic of the chat client: locale coverage, permission bitmasks
//! and the view state built on them.

pub mod config;
pub mod desktop;
pub mod locale;
pub mod permissions;
pub mod report;
pub mod routes;
pub mod store;
pub mod types;
pub mod views;

pub use locale::{
    LocaleTree,
    TranslationPolicy,
    compute_coverage,
};
pub use permissions::{
    add_bit,
    has_bit,
    remove_bit,
    toggle_permission,
};

//! Language catalog and language key normalization.

use std::fmt;

use url::Url;

/// Key of the language every other locale is compared against.
pub const BASE_LANGUAGE: &str = "en-gb";

/// Normalized language key.
///
/// The catalog and locale files use dashed keys (`en-gb`) while the stored
/// preference uses underscores (`en_gb`). Both spellings compare equal once
/// wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageKey(String);

impl LanguageKey {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self(key.trim().to_lowercase().replace('_', "-"))
    }

    #[must_use]
    pub fn base() -> Self {
        Self(BASE_LANGUAGE.to_string())
    }

    #[must_use]
    pub fn is_base(&self) -> bool {
        self.0 == BASE_LANGUAGE
    }

    /// Dashed form used for files and the catalog (`en-gb`).
    #[must_use]
    pub fn as_file_key(&self) -> &str {
        &self.0
    }

    /// Underscored form used for the stored preference (`en_gb`).
    #[must_use]
    pub fn as_stored_key(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A language offered in the language settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub key: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Names or profile URLs of the people who translated it.
    pub contributors: &'static [&'static str],
}

impl Language {
    pub fn contributor_entries(&self) -> impl Iterator<Item = Contributor> + '_ {
        self.contributors.iter().map(|raw| Contributor::parse(raw))
    }
}

/// Languages offered by the client, base language first.
pub const LANGUAGES: &[Language] = &[
    Language {
        key: "en-gb",
        name: "English",
        emoji: "🇬🇧",
        contributors: &["https://github.com/SupertigerDev"],
    },
    Language {
        key: "en-us",
        name: "English (US)",
        emoji: "🇺🇸",
        contributors: &["https://github.com/SupertigerDev"],
    },
    Language { key: "de-de", name: "Deutsch", emoji: "🇩🇪", contributors: &["Community"] },
    Language { key: "es-es", name: "Español", emoji: "🇪🇸", contributors: &["Community"] },
    Language {
        key: "fr-fr",
        name: "Français",
        emoji: "🇫🇷",
        contributors: &["https://github.com/nerimity", "Community"],
    },
    Language { key: "ja-jp", name: "日本語", emoji: "🇯🇵", contributors: &["Community"] },
    Language { key: "pl-pl", name: "Polski", emoji: "🇵🇱", contributors: &["Community"] },
    Language { key: "pt-br", name: "Português (Brasil)", emoji: "🇧🇷", contributors: &["Community"] },
    Language { key: "ru-ru", name: "Русский", emoji: "🇷🇺", contributors: &["Community"] },
    Language { key: "tr-tr", name: "Türkçe", emoji: "🇹🇷", contributors: &["Community"] },
];

/// Looks a language up by key in either spelling.
#[must_use]
pub fn find_language(key: &LanguageKey) -> Option<&'static Language> {
    LANGUAGES.iter().find(|language| language.key == key.as_file_key())
}

/// How a contributor entry is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contributor {
    /// A profile link labelled with the last path segment of the URL.
    Link { href: String, label: String },
    Name(String),
}

impl Contributor {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(_) => Self::Link { href: raw.to_string(), label: last_path(raw).to_string() },
            Err(_) => Self::Name(raw.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } => label,
            Self::Name(name) => name,
        }
    }
}

/// Segment after the last `/`.
fn last_path(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

//! Language settings page.

use serde_json::{
    Value,
    json,
};

use super::{
    Breadcrumb,
    ViewError,
};
use crate::locale::{
    LANGUAGES,
    Language,
    LanguageKey,
    LocaleSource,
    LocaleTree,
    TranslationPolicy,
    compute_coverage_with,
};
use crate::store::{
    HeaderInfo,
    KeyValueStore,
    Signal,
    StorageKey,
};

/// A row in the language list.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageItem {
    pub language: &'static Language,
    pub selected: bool,
    /// Coverage badge, only on the selected row.
    pub percent_label: Option<String>,
}

/// State behind the language settings page.
#[derive(Debug)]
pub struct LanguageSettings<S, K> {
    /// Base language strings.
    base: LocaleTree,
    /// Loads the other languages.
    source: S,
    /// Persists the chosen language.
    storage: K,
    /// How translated strings are recognized.
    policy: TranslationPolicy,
    /// Language in use.
    current: Signal<LanguageKey>,
    /// Set once the choice differs from the stored one.
    language_updated: Signal<bool>,
    /// Coverage of the current language.
    percent_translated: Signal<f64>,
}

impl<S: LocaleSource, K: KeyValueStore> LanguageSettings<S, K> {
    /// Creates the page state and publishes its header.
    ///
    /// The current language comes from storage and falls back to the base
    /// language.
    pub fn new(
        base: LocaleTree,
        source: S,
        storage: K,
        policy: TranslationPolicy,
        header: &Signal<HeaderInfo>,
    ) -> Self {
        header.set(HeaderInfo::new("Settings - Language", "settings"));
        let current = storage
            .get_string(StorageKey::AppLanguage)
            .map_or_else(LanguageKey::base, |stored| LanguageKey::new(&stored));

        Self {
            base,
            source,
            storage,
            policy,
            current: Signal::new(current),
            language_updated: Signal::new(false),
            percent_translated: Signal::new(0.0),
        }
    }

    /// Computes the coverage of the current language.
    ///
    /// # Errors
    /// The current language's locale file exists but cannot be loaded.
    pub fn mount(&self) -> Result<(), ViewError> {
        let current = self.current.get();
        if current.is_base() {
            self.percent_translated.set(100.0);
            return Ok(());
        }
        if let Some(candidate) = self.source.load(&current)? {
            self.percent_translated.set(self.coverage_of(&candidate));
        }
        Ok(())
    }

    /// Switches the UI language.
    ///
    /// A language without a locale file is ignored. Switching away from the
    /// stored language flags that a reload is needed to apply it everywhere.
    ///
    /// # Errors
    /// - The locale file cannot be loaded
    /// - The choice cannot be persisted
    pub fn set_language(&self, key: &str) -> Result<(), ViewError> {
        let key = LanguageKey::new(key);
        let percent = if key.is_base() {
            100.0
        } else {
            let Some(candidate) = self.source.load(&key)? else {
                tracing::warn!(language = %key, "No locale file for language, keeping current");
                return Ok(());
            };
            self.coverage_of(&candidate)
        };

        let stored = self.storage.get_string(StorageKey::AppLanguage).map(|s| LanguageKey::new(&s));
        self.storage.set_string(StorageKey::AppLanguage, &key.as_stored_key())?;

        if stored.as_ref() != Some(&key) {
            self.language_updated.set(true);
        }
        self.percent_translated.set(percent);
        tracing::debug!(language = %key, "Language changed");
        self.current.set(key);
        Ok(())
    }

    /// Coverage of `candidate` under the page's policy.
    fn coverage_of(&self, candidate: &LocaleTree) -> f64 {
        compute_coverage_with(&self.base, Some(candidate), self.policy)
    }

    /// Message handed to the external translation tool: the base strings and
    /// the strings of `key`, or `None` when the language has no locale file.
    ///
    /// # Errors
    /// The locale file exists but cannot be loaded.
    pub fn translation_tool_message(&self, key: &str) -> Result<Option<Value>, ViewError> {
        let key = LanguageKey::new(key);
        let translated = if key.is_base() { Some(self.base.clone()) } else { self.source.load(&key)? };
        Ok(translated.map(|tree| json!({ "default": self.base.to_json(), "translated": tree.to_json() })))
    }

    /// Badge shown next to a language: the floored percentage, only on the
    /// selected row and only when something is translated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent_label(&self, selected: bool) -> Option<String> {
        let percent = self.percent_translated.get();
        (selected && percent > 0.0).then(|| format!("{}%", percent.floor() as u64))
    }

    #[must_use]
    pub fn language_items(&self) -> Vec<LanguageItem> {
        let current = self.current.get();
        LANGUAGES
            .iter()
            .map(|language| {
                let selected = language.key == current.as_file_key();
                LanguageItem { language, selected, percent_label: self.percent_label(selected) }
            })
            .collect()
    }

    #[must_use]
    pub const fn breadcrumbs() -> [Breadcrumb; 2] {
        [Breadcrumb::home(), Breadcrumb::current("settings.drawer.language")]
    }

    #[must_use]
    pub const fn current(&self) -> &Signal<LanguageKey> {
        &self.current
    }

    #[must_use]
    pub const fn language_updated(&self) -> &Signal<bool> {
        &self.language_updated
    }

    #[must_use]
    pub const fn percent_translated(&self) -> &Signal<f64> {
        &self.percent_translated
    }
}

//! Spellcheck suggestions pushed by the desktop shell.

use std::sync::Arc;

use super::WindowApi;
use crate::store::Signal;

/// Latest spellcheck suggestions for the word under the cursor.
///
/// The bridge callback only holds a weak reference, so dropping the state
/// detaches it.
#[derive(Debug, Default)]
pub struct SpellcheckState {
    /// Shared with the bridge callback through a weak reference.
    suggestions: Arc<Signal<Vec<String>>>,
}

impl SpellcheckState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts receiving suggestions from `bridge`.
    pub fn attach(&self, bridge: &impl WindowApi) {
        let suggestions = Arc::downgrade(&self.suggestions);
        bridge.on_spellcheck(Box::new(move |words| {
            if let Some(signal) = suggestions.upgrade() {
                signal.set(words);
            } else {
                tracing::trace!("Spellcheck suggestions arrived after detach");
            }
        }));
    }

    #[must_use]
    pub fn suggestions(&self) -> &Signal<Vec<String>> {
        &self.suggestions
    }

    /// Clears the suggestions, e.g. once the context menu closes.
    pub fn clear(&self) {
        self.suggestions.set_if_changed(Vec::new());
    }
}

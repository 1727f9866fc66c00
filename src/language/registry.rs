//! Registry of known languages, looked up by case-insensitive name

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::types::LanguageDefinition;

/// A name paired with the definition registered under it.
#[derive(Debug, Clone)]
pub struct Language {
    pub name: String,
    pub definition: Arc<LanguageDefinition>,
}

/// Append-only collection of languages. Construct one at startup, let the
/// definition providers register into it, then share it by reference with
/// whatever does the highlighting. Registration takes `&self` so providers
/// on different threads can register concurrently; each entry is fully
/// built before it is pushed, so `resolve()` never sees half of one.
#[derive(Debug, Default)]
pub struct Registry {
    languages: RwLock<Vec<Language>>,
    empty: Arc<LanguageDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// A registry already holding the languages that ship with this crate.
    pub fn with_builtins() -> Self {
        let registry = Registry::new();
        super::javascript::register(&registry);
        registry
    }

    /// Add a language. Duplicate names are kept; see `resolve()` for which
    /// one wins.
    pub fn register(&self, name: &str, definition: impl Into<Arc<LanguageDefinition>>) {
        let language = Language {
            name: name.to_string(),
            definition: definition.into(),
        };

        debug!("Registering language {}", name);
        self.languages
            .write()
            .push(language);
    }

    /// Look up a definition by name, ignoring case. An unknown name gives
    /// the empty definition and a name registered more than once gives the
    /// earliest registration; both are logged but neither is an error.
    pub fn resolve(&self, name: &str) -> Arc<LanguageDefinition> {
        let languages = self
            .languages
            .read();

        let wanted = name.to_lowercase();
        let mut found = languages
            .iter()
            .filter(|language| {
                language
                    .name
                    .to_lowercase()
                    == wanted
            });

        match found.next() {
            None => {
                warn!("No language named \"{}\" is registered, nothing will be highlighted", name);
                Arc::clone(&self.empty)
            }
            Some(first) => {
                let others = found.count();
                if others > 0 {
                    warn!(
                        "Language \"{}\" is registered {} times, using the first",
                        name,
                        others + 1
                    );
                }
                Arc::clone(&first.definition)
            }
        }
    }

    /// Whether a language is registered under this name, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.languages
            .read()
            .iter()
            .any(|language| {
                language
                    .name
                    .to_lowercase()
                    == wanted
            })
    }

    /// Names of all registered languages, in registration order.
    pub fn languages(&self) -> Vec<String> {
        self.languages
            .read()
            .iter()
            .map(|language| {
                language
                    .name
                    .clone()
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.languages
            .read()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

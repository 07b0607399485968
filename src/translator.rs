//! The stateful translation façade.
//!
//! A [`Translator`] owns the dictionary, the active locale, and the
//! registered listeners. All state is mutated through explicit setters;
//! construct one per scope that needs isolated translation state.

use tracing::{debug, warn};

use crate::config::TranslatorConfig;
use crate::dictionary::Dictionary;
use crate::dom::{Element, Node};
use crate::error::Error;
use crate::events::{Event, Listener};
use crate::markup;
use crate::resolver::{Resolution, resolve_key};

pub struct Translator {
    config: TranslatorConfig,
    dictionary: Dictionary,
    locale: String,
    listeners: Vec<Listener>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("config", &self.config)
            .field("locale", &self.locale)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Translator {
    pub fn new() -> Self {
        Self::with_config(TranslatorConfig::default())
    }

    pub fn with_config(config: TranslatorConfig) -> Self {
        let locale = config.locale.clone();
        Self {
            config,
            dictionary: Dictionary::default(),
            locale,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Replace the dictionary wholesale. No merging, no validation.
    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = dictionary;
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Replace the active locale, then fire all `languageChanged` listeners
    /// in registration order.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
        self.fire(Event::LanguageChanged);
    }

    /// Replace the active locale, immediately re-translate `root`, then
    /// fire all `languageChanged` listeners. Returns the rewrite count.
    pub fn set_locale_and_translate(
        &mut self,
        locale: impl Into<String>,
        root: &mut Element,
    ) -> usize {
        self.locale = locale.into();
        let count = self.translate_tree(root);
        self.fire(Event::LanguageChanged);
        count
    }

    /// Register `callback` for the named event.
    ///
    /// The event name is validated against the fixed allow-list; an
    /// unrecognized name fails with [`Error::UnknownEvent`]. Registrations
    /// are append-only and never deduplicated.
    pub fn on(&mut self, event_name: &str, callback: impl FnMut() + 'static) -> Result<(), Error> {
        let event = Event::parse(event_name)?;
        self.listeners.push(Listener {
            event,
            callback: Box::new(callback),
        });
        Ok(())
    }

    fn fire(&mut self, event: Event) {
        for listener in self.listeners.iter_mut().filter(|l| l.event == event) {
            (listener.callback)();
        }
    }

    // ============================================================
    // Resolution
    // ============================================================

    /// Resolve one dotted key for the active locale.
    ///
    /// Never fails: a miss returns the unresolved remainder of the key, and
    /// a leaf with no usable entry for the locale returns the key itself.
    pub fn resolve(&self, key: &str) -> String {
        match resolve_key(self.dictionary.root(), &self.locale, key) {
            Resolution::Resolved(text) => text,
            Resolution::Unresolved { remainder } => {
                warn!(key, %remainder, "unresolved translation key");
                remainder
            }
            Resolution::MissingLocale => {
                warn!(key, locale = %self.locale, "no locale entry for translation key");
                key.to_string()
            }
        }
    }

    /// Resolve several keys, preserving input order.
    pub fn resolve_keys<I, S>(&self, keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().map(|key| self.resolve(key.as_ref())).collect()
    }

    /// Strict variant of [`resolve`](Self::resolve): misses become errors
    /// instead of placeholder strings.
    pub fn try_resolve(&self, key: &str) -> Result<String, Error> {
        match resolve_key(self.dictionary.root(), &self.locale, key) {
            Resolution::Resolved(text) => Ok(text),
            Resolution::Unresolved { remainder } => Err(Error::UnresolvedKey {
                key: key.to_string(),
                remainder,
            }),
            Resolution::MissingLocale => Err(Error::MissingLocale {
                key: key.to_string(),
                locale: self.locale.clone(),
            }),
        }
    }

    // ============================================================
    // Tree and markup translation
    // ============================================================

    /// Visit `root` and every descendant element; replace the content of
    /// each element carrying the marker attribute with its resolved text.
    /// Returns the number of elements rewritten.
    ///
    /// A rewritten element's subtree is replaced, so markers nested inside
    /// it no longer exist and are not counted.
    pub fn translate_tree(&self, root: &mut Element) -> usize {
        let count = self.translate_element(root);
        debug!(count, "translated element tree");
        count
    }

    fn translate_element(&self, element: &mut Element) -> usize {
        let key = element.attr(&self.config.marker_attribute).map(str::to_owned);
        if let Some(key) = key {
            element.set_text(self.resolve(&key));
            return 1;
        }

        element
            .children
            .iter_mut()
            .map(|child| match child {
                Node::Element(child_element) => self.translate_element(child_element),
                Node::Text(_) => 0,
            })
            .sum()
    }

    /// Translate a raw markup string and return the mutated markup.
    ///
    /// The same rewrite as [`translate_tree`](Self::translate_tree), applied
    /// to a detached parse of `input`.
    pub fn translate_markup(&self, input: &str) -> Result<String, Error> {
        let output = markup::rewrite(input, &self.config.marker_attribute, |key| {
            self.resolve(key)
        })?;
        debug!(bytes = output.len(), "translated markup string");
        Ok(output)
    }
}

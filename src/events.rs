//! Event allow-list and listener records.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Name of the event fired after the active locale changes.
pub const EVENT_LANGUAGE_CHANGED: &str = "languageChanged";

/// Events a listener can be registered for.
///
/// The set is fixed; registering under any other name fails with
/// [`Error::UnknownEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    LanguageChanged,
}

impl Event {
    /// Parse an event name against the allow-list.
    pub fn parse(name: &str) -> Result<Self, Error> {
        match name {
            EVENT_LANGUAGE_CHANGED => Ok(Event::LanguageChanged),
            _ => Err(Error::UnknownEvent(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::LanguageChanged => EVENT_LANGUAGE_CHANGED,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Event {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::parse(s)
    }
}

/// A registered listener. Listeners are append-only and fire in
/// registration order; duplicates are kept and all fire.
pub(crate) struct Listener {
    pub(crate) event: Event,
    pub(crate) callback: Box<dyn FnMut()>,
}

//! Crate error type.

/// Errors surfaced by the public API.
///
/// Lenient resolution never returns an error: missing keys and locales
/// degrade to placeholder strings. `UnresolvedKey` and `MissingLocale` are
/// produced only by the strict resolution path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A listener was registered for an event name outside the allow-list.
    #[error("translator has no event named '{0}'")]
    UnknownEvent(String),

    /// Strict resolution stopped before consuming the whole key.
    #[error("translation key '{key}' is unresolved from '{remainder}'")]
    UnresolvedKey { key: String, remainder: String },

    /// Strict resolution reached a leaf with no string for the locale.
    #[error("translation key '{key}' has no entry for locale '{locale}'")]
    MissingLocale { key: String, locale: String },

    /// The markup string could not be parsed.
    #[error("invalid markup: {0}")]
    Markup(#[from] quick_xml::Error),

    /// The rewritten markup was not valid UTF-8.
    #[error("rewritten markup is not valid UTF-8: {0}")]
    MarkupEncoding(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use crate::error::*;

    #[test]
    fn test_unknown_event_message_names_the_event() {
        let err = Error::UnknownEvent("unknownEvent".to_string());
        assert_eq!(err.to_string(), "translator has no event named 'unknownEvent'");
    }

    #[test]
    fn test_unresolved_key_message() {
        let err = Error::UnresolvedKey {
            key: "title.subtitle".to_string(),
            remainder: "subtitle".to_string(),
        };
        assert!(err.to_string().contains("title.subtitle"));
        assert!(err.to_string().contains("subtitle"));
    }

    #[test]
    fn test_missing_locale_message() {
        let err = Error::MissingLocale {
            key: "title".to_string(),
            locale: "fr".to_string(),
        };
        assert!(err.to_string().contains("title"));
        assert!(err.to_string().contains("fr"));
    }
}

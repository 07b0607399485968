use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Locale a fresh translator starts with.
pub const DEFAULT_LOCALE: &str = "de";

/// Attribute that marks an element for translation; its value is the
/// dotted lookup key.
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-tl";

/// Configuration for a [`Translator`](crate::translator::Translator).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorConfig {
    /// Initial active locale (e.g. "de", "en").
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Attribute name scanned for during tree and markup translation.
    #[serde(default = "default_marker_attribute")]
    pub marker_attribute: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_marker_attribute() -> String {
    DEFAULT_MARKER_ATTRIBUTE.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            marker_attribute: default_marker_attribute(),
        }
    }
}

impl TranslatorConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.locale.is_empty() {
            bail!("'locale' must not be empty");
        }
        if self.marker_attribute.is_empty() {
            bail!("'markerAttribute' must not be empty");
        }
        Ok(())
    }
}

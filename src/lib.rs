//! translato — dictionary-based localization for document trees.
//!
//! Stores a nested key→locale→string dictionary, resolves dotted lookup
//! keys against the active locale, and rewrites marked elements of a
//! document tree (or a raw markup string) with the resolved text. Lookups
//! never fail: a missing key degrades to a visible placeholder instead of
//! breaking the page being translated.
//!
//! ## Module Structure
//!
//! - `config`: translator configuration (initial locale, marker attribute)
//! - `dictionary`: dictionary storage and locale-file loading
//! - `dom`: the lightweight element tree rewritten in place
//! - `error`: crate error type
//! - `events`: the event allow-list and listener records
//! - `markup`: streaming rewrite of markup strings
//! - `resolver`: dotted-key resolution against the dictionary
//! - `translator`: the stateful façade tying everything together
//!
//! ## Example
//!
//! ```
//! use translato::{Dictionary, Translator};
//!
//! let mut translator = Translator::new();
//! translator.set_dictionary(
//!     Dictionary::from_json(r#"{ "title": { "de": "Titel", "en": "Title" } }"#).unwrap(),
//! );
//!
//! assert_eq!(translator.resolve("title"), "Titel");
//! translator.set_locale("en");
//! assert_eq!(translator.resolve("title"), "Title");
//! ```

pub mod config;
pub mod dictionary;
pub mod dom;
pub mod error;
pub mod events;
pub mod markup;
pub mod resolver;
pub mod translator;

pub use config::TranslatorConfig;
pub use dictionary::Dictionary;
pub use dom::{Element, Node};
pub use error::Error;
pub use events::Event;
pub use resolver::Resolution;
pub use translator::Translator;

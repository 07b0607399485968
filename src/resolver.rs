//! Dotted-key resolution against a dictionary.
//!
//! A lookup key is a dot-separated path ("menu.start") addressing a leaf of
//! the dictionary. Resolution walks the dictionary one segment at a time and
//! never fails: a miss produces the unresolved remainder of the path, which
//! callers surface as a visible placeholder.

use serde_json::Value;

/// Outcome of walking the dictionary with one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every segment was consumed and the leaf holds a string for the locale.
    Resolved(String),
    /// The walk stopped at a missing segment. `remainder` is the unconsumed
    /// part of the key, from the failing segment onward, rejoined with ".".
    Unresolved { remainder: String },
    /// Every segment was consumed, but the reached node has no string entry
    /// for the locale.
    MissingLocale,
}

/// Resolve `key` against `root` for `locale`.
///
/// A segment is consumed only when its lookup succeeds; `null` values and
/// absent properties are misses, so a key whose first segment is absent
/// (and the empty key) yields the full original key as the remainder.
/// Object nodes are indexed by name, array nodes by numeric segments.
pub fn resolve_key(root: &Value, locale: &str, key: &str) -> Resolution {
    let segments: Vec<&str> = key.split('.').collect();
    let mut node = root;

    for (index, segment) in segments.iter().enumerate() {
        match child(node, segment) {
            Some(next) if !next.is_null() => node = next,
            _ => {
                return Resolution::Unresolved {
                    remainder: segments[index..].join("."),
                };
            }
        }
    }

    match node.get(locale).and_then(Value::as_str) {
        Some(text) => Resolution::Resolved(text.to_string()),
        None => Resolution::MissingLocale,
    }
}

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::resolver::*;

    fn dictionary() -> Value {
        json!({
            "title": {"de": "Titel", "en": "Title"},
            "menu": {
                "start": {"de": "Start", "en": "Home"},
                "about": {"de": "Über uns", "en": "About"}
            },
            "steps": [{"de": "eins"}, {"de": "zwei"}],
            "broken": null
        })
    }

    #[test]
    fn test_resolve_top_level_key() {
        assert_eq!(
            resolve_key(&dictionary(), "de", "title"),
            Resolution::Resolved("Titel".to_string())
        );
        assert_eq!(
            resolve_key(&dictionary(), "en", "title"),
            Resolution::Resolved("Title".to_string())
        );
    }

    #[test]
    fn test_resolve_nested_key() {
        assert_eq!(
            resolve_key(&dictionary(), "en", "menu.start"),
            Resolution::Resolved("Home".to_string())
        );
    }

    #[test]
    fn test_resolve_array_index_segment() {
        assert_eq!(
            resolve_key(&dictionary(), "de", "steps.1"),
            Resolution::Resolved("zwei".to_string())
        );
    }

    #[test]
    fn test_miss_below_leaf_returns_remainder() {
        assert_eq!(
            resolve_key(&dictionary(), "de", "title.subtitle"),
            Resolution::Unresolved {
                remainder: "subtitle".to_string()
            }
        );
    }

    #[test]
    fn test_miss_at_first_segment_returns_full_key() {
        assert_eq!(
            resolve_key(&dictionary(), "de", "missing.start"),
            Resolution::Unresolved {
                remainder: "missing.start".to_string()
            }
        );
    }

    #[test]
    fn test_empty_key_returns_full_key() {
        assert_eq!(
            resolve_key(&dictionary(), "de", ""),
            Resolution::Unresolved {
                remainder: "".to_string()
            }
        );
    }

    #[test]
    fn test_miss_in_the_middle_returns_remainder_from_failing_segment() {
        assert_eq!(
            resolve_key(&dictionary(), "de", "menu.missing.deep"),
            Resolution::Unresolved {
                remainder: "missing.deep".to_string()
            }
        );
    }

    #[test]
    fn test_null_value_is_a_miss() {
        assert_eq!(
            resolve_key(&dictionary(), "de", "broken.x"),
            Resolution::Unresolved {
                remainder: "broken.x".to_string()
            }
        );
    }

    #[test]
    fn test_segment_below_string_leaf_is_a_miss() {
        // "title.de" consumes through the locale map into the string itself
        assert_eq!(
            resolve_key(&dictionary(), "de", "title.de.x"),
            Resolution::Unresolved {
                remainder: "x".to_string()
            }
        );
    }

    #[test]
    fn test_leaf_without_locale_entry() {
        assert_eq!(
            resolve_key(&dictionary(), "fr", "title"),
            Resolution::MissingLocale
        );
    }

    #[test]
    fn test_branch_reached_instead_of_leaf() {
        // "menu" ends on a nested mapping with no locale entries
        assert_eq!(resolve_key(&dictionary(), "de", "menu"), Resolution::MissingLocale);
    }

    #[test]
    fn test_non_string_locale_entry() {
        let root = json!({"title": {"de": {"nested": "x"}}});
        assert_eq!(resolve_key(&root, "de", "title"), Resolution::MissingLocale);
    }

    #[test]
    fn test_null_dictionary_misses_everything() {
        assert_eq!(
            resolve_key(&Value::Null, "de", "title"),
            Resolution::Unresolved {
                remainder: "title".to_string()
            }
        );
    }
}

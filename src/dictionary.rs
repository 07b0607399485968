//! Dictionary storage and locale-file loading.
//!
//! A dictionary maps string keys to either nested dictionaries or
//! locale→string maps. It is stored as plain JSON: no shape is enforced at
//! construction time, and malformed entries degrade at resolution time
//! instead of failing.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// The nested key→locale→string translation store.
///
/// Set on a translator wholesale; never merged in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    /// An empty dictionary; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value as-is. The value is not validated.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse a dictionary from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let root = serde_json::from_str(json).context("Failed to parse dictionary JSON")?;
        Ok(Self { root })
    }

    /// Build a dictionary from per-locale message trees.
    ///
    /// Each tree is a nested key→string document for one locale (the usual
    /// one-file-per-locale layout). The trees are inverted into the
    /// locale-innermost shape:
    ///
    /// `("de", {"title": "Titel"})` + `("en", {"title": "Title"})`
    /// becomes `{"title": {"de": "Titel", "en": "Title"}}`.
    ///
    /// Array elements contribute index segments; non-string scalars are
    /// skipped.
    pub fn from_locale_trees<I, S>(trees: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let mut root = Map::new();
        for (locale, tree) in trees {
            merge_locale_tree(&mut root, locale.as_ref(), &tree);
        }
        Self {
            root: Value::Object(root),
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        match &self.root {
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn merge_locale_tree(target: &mut Map<String, Value>, locale: &str, tree: &Value) {
    match tree {
        Value::Object(entries) => {
            for (key, value) in entries {
                merge_locale_entry(target, key, locale, value);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                merge_locale_entry(target, &index.to_string(), locale, value);
            }
        }
        _ => {}
    }
}

fn merge_locale_entry(target: &mut Map<String, Value>, key: &str, locale: &str, value: &Value) {
    match value {
        Value::String(text) => {
            let slot = target
                .entry(key)
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(leaf) = slot {
                leaf.insert(locale.to_string(), Value::String(text.clone()));
            }
        }
        Value::Object(_) | Value::Array(_) => {
            let slot = target
                .entry(key)
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(branch) = slot {
                merge_locale_tree(branch, locale, value);
            }
        }
        _ => {}
    }
}

// ============================================================
// Locale file scanning
// ============================================================

/// A warning from scanning locale files.
#[derive(Debug, Clone)]
pub struct DictionaryScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanDictionaryResult {
    pub dictionary: Dictionary,
    pub warnings: Vec<DictionaryScanWarning>,
}

/// Extracts the locale from a file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/locales/ja.json" -> Some("ja")
pub fn locale_from_path(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Read every `<locale>.json` file in `locale_dir` and build one dictionary.
///
/// Files that cannot be read or parsed produce warnings instead of failing
/// the scan. Locales are merged in name order.
pub fn scan_locale_files(locale_dir: impl AsRef<Path>) -> Result<ScanDictionaryResult> {
    let locale_dir = locale_dir.as_ref();

    if !locale_dir.exists() {
        bail!(
            "Locale directory '{}' does not exist.\n\
             Hint: each locale is one '<locale>.json' file, e.g. 'de.json'.",
            locale_dir.display()
        );
    }

    if !locale_dir.is_dir() {
        bail!("'{}' is not a directory.", locale_dir.display());
    }

    let mut trees: Vec<(String, Value)> = Vec::new();
    let mut warnings = Vec::new();

    for entry in fs::read_dir(locale_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = locale_from_path(&path)
        {
            match parse_locale_file(&path) {
                Ok(tree) => trees.push((locale, tree)),
                Err(e) => {
                    warnings.push(DictionaryScanWarning {
                        file_path: path.to_string_lossy().to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    // read_dir yields entries in platform-dependent order
    trees.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(ScanDictionaryResult {
        dictionary: Dictionary::from_locale_trees(trees),
        warnings,
    })
}

fn parse_locale_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse locale file: {:?}", path))
}

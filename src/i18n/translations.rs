//! Translation Table
//!
//! Typed `language -> (key -> text)` mapping with a total lookup.

use serde::Deserialize;
use std::collections::HashMap;

use super::{LanguageCode, DEFAULT_LANGUAGE};

/// Result of resolving one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Entry exists for the requested language
    Found(&'a str),
    /// Requested language lacks the key, default language has it
    Fallback(&'a str),
    /// Neither has it; the element keeps its current content
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(HashMap<String, HashMap<String, String>>);

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entries(mut self, code: &str, entries: &[(&str, &str)]) -> Self {
        let table = self.0.entry(code.to_string()).or_default();
        for (key, text) in entries {
            table.insert(key.to_string(), text.to_string());
        }
        self
    }

    pub fn has_language(&self, code: &LanguageCode) -> bool {
        self.0.contains_key(code.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn lookup(&self, code: &LanguageCode, key: &str) -> Lookup<'_> {
        if let Some(text) = self.0.get(code.as_str()).and_then(|table| table.get(key)) {
            return Lookup::Found(text);
        }
        if code.as_str() != DEFAULT_LANGUAGE {
            if let Some(text) = self.0.get(DEFAULT_LANGUAGE).and_then(|table| table.get(key)) {
                return Lookup::Fallback(text);
            }
        }
        Lookup::Missing
    }
}

//! Internationalization
//!
//! One authoritative language value fanned out to selector controls,
//! mirrored form fields and translatable content.

mod controller;
mod nav;
mod translations;

pub use controller::{LanguageController, LanguageView, SlotKind, Translatable, Trigger};
pub use translations::TranslationTable;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LanguageError;

/// Language options (code, label)
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("de", "Deutsch"),
];

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub(crate) fn new(code: &str) -> Self {
        Self(code.to_string())
    }

    /// Accept a supported code, ignoring case and surrounding whitespace
    pub fn parse(raw: &str) -> Result<Self, LanguageError> {
        let code = raw.trim().to_ascii_lowercase();
        if SUPPORTED_LANGUAGES.iter().any(|(supported, _)| *supported == code) {
            Ok(Self(code))
        } else {
            Err(LanguageError::Unsupported(raw.to_string()))
        }
    }

    pub fn fallback() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> &'static str {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, label)| *label)
            .unwrap_or("English")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        assert_eq!(LanguageCode::parse(" DE ").unwrap().as_str(), "de");
        assert_eq!(LanguageCode::parse("en").unwrap().label(), "English");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            LanguageCode::parse("fr"),
            Err(LanguageError::Unsupported("fr".to_string()))
        );
        assert!(LanguageCode::parse("").is_err());
    }
}

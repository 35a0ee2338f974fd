//! Frontend Models
//!
//! Data structures exchanged with the correction-merging service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier rendered into a correction checkbox
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrectionId(String);

impl CorrectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CorrectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A proposed edit surfaced by the server.
///
/// The payload (position, suggestion, explanation...) is never
/// interpreted on the client, only forwarded.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionItem {
    pub id: CorrectionId,
    pub payload: Value,
}

/// Body of `POST /apply_corrections`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyRequest {
    pub selected_corrections: Vec<Value>,
    pub resume_text: String,
}

impl ApplyRequest {
    pub fn new(items: &[CorrectionItem], resume_text: impl Into<String>) -> Self {
        Self {
            selected_corrections: items.iter().map(|item| item.payload.clone()).collect(),
            resume_text: resume_text.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.selected_corrections.len()
    }
}

/// Success body of `POST /apply_corrections`; failures carry `error` instead
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApplyResponse {
    #[serde(default)]
    pub corrected_text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

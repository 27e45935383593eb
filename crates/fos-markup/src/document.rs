//! Markup Document
//!
//! Unit of input exchanged with the template parser: the root elements of
//! one source file, serialized as JSON.

use crate::{ElementNode, MarkupError};
use serde::{Deserialize, Serialize};

/// Root elements of one template source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkupDocument {
    /// Source file the elements were parsed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub elements: Vec<ElementNode>,
}

impl MarkupDocument {
    pub fn new(source: Option<String>, elements: Vec<ElementNode>) -> Self {
        Self { source, elements }
    }

    /// Parse a document from its JSON form
    pub fn from_json(json: &str) -> Result<Self, MarkupError> {
        let document: Self = serde_json::from_str(json)?;
        tracing::debug!(
            "Loaded markup document {:?} ({} root elements)",
            document.source,
            document.elements.len()
        );
        Ok(document)
    }

    pub fn to_json(&self) -> Result<String, MarkupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of elements, descendants included
    pub fn element_count(&self) -> usize {
        self.elements.iter().map(|e| e.walk().count()).sum()
    }
}

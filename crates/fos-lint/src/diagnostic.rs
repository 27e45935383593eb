//! Diagnostics
//!
//! What a rule reports: the offending element (or one of its attributes)
//! and a fixed, rule-specific message.

use fos_markup::{Attribute, ElementNode, Span};
use serde::Serialize;
use std::fmt;

/// Part of the element a diagnostic points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "camelCase")]
pub enum Target {
    OpeningElement,
    Attribute(String),
}

/// Single lint finding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub message: String,
    /// Tag name as written
    pub tag: String,
    pub target: Target,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Source file, filled in when linting a document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Diagnostic {
    /// Diagnostic on the element's opening tag
    pub fn on_element(rule: &'static str, element: &ElementNode, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
            tag: element.name.clone(),
            target: Target::OpeningElement,
            span: element.span,
            source: None,
        }
    }

    /// Diagnostic on one attribute of the element
    pub fn on_attribute(
        rule: &'static str,
        element: &ElementNode,
        attribute: &Attribute,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            message: message.into(),
            tag: element.name.clone(),
            target: Target::Attribute(attribute.name.clone()),
            span: attribute.span.or(element.span),
            source: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{}", source)?;
            if let Some(span) = self.span {
                write!(f, ":{}", span.start)?;
            }
            f.write_str(": ")?;
        }
        write!(f, "<{}> {}: {}", self.tag, self.rule, self.message)
    }
}

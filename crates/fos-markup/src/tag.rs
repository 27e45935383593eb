//! Tag Classification
//!
//! Native tags are case-insensitive and normalized here, once. Component
//! tags keep their spelling and never match native-element tables.

use crate::MarkupError;
use std::fmt;

/// Classified element tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementTag {
    /// Platform element, lower-cased (`div`, `input`)
    Native(String),
    /// Capitalized or member-expression component (`Button`, `Foo.Bar`)
    Component(String),
}

impl ElementTag {
    /// Classify a tag name as written in the template
    pub fn parse(name: &str) -> Result<Self, MarkupError> {
        let name = name.trim();
        let first = name.chars().next().ok_or(MarkupError::MissingTagName)?;

        if first.is_uppercase() || name.contains('.') {
            Ok(Self::Component(name.to_string()))
        } else {
            Ok(Self::Native(name.to_ascii_lowercase()))
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Native(name) | Self::Component(name) => name,
        }
    }

    /// Lower-cased name for native tags
    pub fn native(&self) -> Option<&str> {
        match self {
            Self::Native(name) => Some(name),
            Self::Component(_) => None,
        }
    }

    #[inline]
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    #[inline]
    pub fn is_component(&self) -> bool {
        matches!(self, Self::Component(_))
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

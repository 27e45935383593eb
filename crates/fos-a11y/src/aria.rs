//! ARIA Support
//!
//! ARIA states and properties: declared value type and permitted tokens.

use crate::A11yError;
use fos_markup::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Declared value type of an ARIA state/property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaValueType {
    Boolean,
    String,
    /// ID reference
    Id,
    /// ID reference list
    IdList,
    Integer,
    Number,
    Token,
    TokenList,
    /// true / false / mixed
    Tristate,
}

/// ARIA state/property definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AriaAttribute {
    pub name: &'static str,
    pub value_type: AriaValueType,
    /// Permitted tokens for `Token` and `TokenList`
    pub values: &'static [&'static str],
}

const fn prop(name: &'static str, value_type: AriaValueType) -> AriaAttribute {
    AriaAttribute { name, value_type, values: &[] }
}

const fn tokens(
    name: &'static str,
    value_type: AriaValueType,
    values: &'static [&'static str],
) -> AriaAttribute {
    AriaAttribute { name, value_type, values }
}

use AriaValueType as T;

const ARIA_ATTRIBUTES: &[AriaAttribute] = &[
    prop("aria-activedescendant", T::Id),
    prop("aria-atomic", T::Boolean),
    tokens("aria-autocomplete", T::Token, &["inline", "list", "both", "none"]),
    prop("aria-braillelabel", T::String),
    prop("aria-brailleroledescription", T::String),
    prop("aria-busy", T::Boolean),
    prop("aria-checked", T::Tristate),
    prop("aria-colcount", T::Integer),
    prop("aria-colindex", T::Integer),
    prop("aria-colindextext", T::String),
    prop("aria-colspan", T::Integer),
    prop("aria-controls", T::IdList),
    tokens(
        "aria-current",
        T::Token,
        &["page", "step", "location", "date", "time", "true", "false"],
    ),
    prop("aria-describedby", T::IdList),
    prop("aria-description", T::String),
    prop("aria-details", T::Id),
    prop("aria-disabled", T::Boolean),
    tokens(
        "aria-dropeffect",
        T::TokenList,
        &["copy", "execute", "link", "move", "none", "popup"],
    ),
    prop("aria-errormessage", T::Id),
    prop("aria-expanded", T::Boolean),
    prop("aria-flowto", T::IdList),
    prop("aria-grabbed", T::Boolean),
    tokens(
        "aria-haspopup",
        T::Token,
        &["false", "true", "menu", "listbox", "tree", "grid", "dialog"],
    ),
    prop("aria-hidden", T::Boolean),
    tokens("aria-invalid", T::Token, &["grammar", "false", "spelling", "true"]),
    prop("aria-keyshortcuts", T::String),
    prop("aria-label", T::String),
    prop("aria-labelledby", T::IdList),
    prop("aria-level", T::Integer),
    tokens("aria-live", T::Token, &["assertive", "off", "polite"]),
    prop("aria-modal", T::Boolean),
    prop("aria-multiline", T::Boolean),
    prop("aria-multiselectable", T::Boolean),
    tokens("aria-orientation", T::Token, &["vertical", "undefined", "horizontal"]),
    prop("aria-owns", T::IdList),
    prop("aria-placeholder", T::String),
    prop("aria-posinset", T::Integer),
    prop("aria-pressed", T::Tristate),
    prop("aria-readonly", T::Boolean),
    tokens("aria-relevant", T::TokenList, &["additions", "all", "removals", "text"]),
    prop("aria-required", T::Boolean),
    prop("aria-roledescription", T::String),
    prop("aria-rowcount", T::Integer),
    prop("aria-rowindex", T::Integer),
    prop("aria-rowindextext", T::String),
    prop("aria-rowspan", T::Integer),
    prop("aria-selected", T::Boolean),
    prop("aria-setsize", T::Integer),
    tokens("aria-sort", T::Token, &["ascending", "descending", "none", "other"]),
    prop("aria-valuemax", T::Number),
    prop("aria-valuemin", T::Number),
    prop("aria-valuenow", T::Number),
    prop("aria-valuetext", T::String),
];

static ARIA: Lazy<HashMap<&'static str, &'static AriaAttribute>> =
    Lazy::new(|| ARIA_ATTRIBUTES.iter().map(|attr| (attr.name, attr)).collect());

/// Look up an ARIA attribute (case-insensitive)
pub fn aria_attribute(name: &str) -> Option<&'static AriaAttribute> {
    ARIA.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn is_aria_attribute(name: &str) -> bool {
    aria_attribute(name).is_some()
}

/// Validate a literal value against the named attribute's definition
pub fn validate_aria_value(name: &str, value: &Value) -> Result<(), A11yError> {
    aria_attribute(name)
        .ok_or_else(|| A11yError::UnknownAttribute(name.to_string()))?
        .validate(value)
}

/// Every known ARIA state/property
pub fn aria_attributes() -> impl Iterator<Item = &'static AriaAttribute> {
    ARIA_ATTRIBUTES.iter()
}

impl AriaAttribute {
    /// Whether a literal value is permitted.
    ///
    /// `null`/`undefined` remove the attribute and are always accepted.
    pub fn accepts(&self, value: &Value) -> bool {
        if value.is_nullish() {
            return true;
        }
        match self.value_type {
            T::Boolean => value.as_bool().is_some(),
            T::String | T::Id | T::IdList => matches!(value, Value::String(_)),
            T::Integer => number_of(value).is_some_and(|n| n.is_finite() && n.fract() == 0.0),
            T::Number => number_of(value).is_some_and(f64::is_finite),
            T::Token => token_of(value).is_some_and(|token| self.permits(&token)),
            T::TokenList => match value {
                Value::String(s) => {
                    let mut tokens = s.split_whitespace().peekable();
                    tokens.peek().is_some()
                        && tokens.all(|token| self.permits(&token.to_ascii_lowercase()))
                }
                Value::Boolean(b) => self.permits(&b.to_string()),
                _ => false,
            },
            T::Tristate => {
                value.as_bool().is_some() || value.as_str().is_some_and(|s| s.eq_ignore_ascii_case("mixed"))
            }
        }
    }

    /// Validate a literal value, describing the expectation on failure
    pub fn validate(&self, value: &Value) -> Result<(), A11yError> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(A11yError::InvalidValue {
                name: self.name.to_string(),
                value: value.to_string(),
                expected: self.describe(),
            })
        }
    }

    /// Human-readable description of the permitted values
    pub fn describe(&self) -> String {
        match self.value_type {
            T::Boolean => "a boolean".into(),
            T::String => "a string".into(),
            T::Id => "a string that represents a DOM element ID".into(),
            T::IdList => "a list of strings that represent DOM element IDs (idlist)".into(),
            T::Integer => "an integer".into(),
            T::Number => "a number".into(),
            T::Token => format!("a single token from the following: {}", self.values.join(", ")),
            T::TokenList => format!(
                "a list of one or more tokens from the following: {}",
                self.values.join(", ")
            ),
            T::Tristate => "a boolean or the string \"mixed\"".into(),
        }
    }

    fn permits(&self, token: &str) -> bool {
        self.values.contains(&token)
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

fn token_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.to_ascii_lowercase()),
        Value::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

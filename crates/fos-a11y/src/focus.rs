//! Focus
//!
//! Keyboard reachability: `tabIndex` resolution and natively focusable
//! elements.

use fos_markup::{resolve, AttributeItem, ElementTag, PropValue, Value};

/// Resolved `tabIndex` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// Not set
    Absent,
    /// Integer value; negative removes from sequential navigation
    Value(i32),
    /// Set to something that is not an integer (`"bad"`, `undefined`)
    Invalid,
    /// Runtime value
    Dynamic,
}

impl TabIndex {
    /// Resolve the `tabIndex` attribute of an element
    pub fn resolve(attributes: &[AttributeItem]) -> Self {
        match resolve(attributes, "tabIndex") {
            PropValue::Absent => Self::Absent,
            PropValue::Dynamic => Self::Dynamic,
            PropValue::Literal(Value::String(s)) => Self::parse(&s),
            PropValue::Literal(Value::Number(n)) if n.fract() == 0.0 => Self::Value(n as i32),
            PropValue::Literal(_) => Self::Invalid,
        }
    }

    /// Parse a string `tabIndex` (`"0"`, `" -1 "`)
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) => Self::Value(n),
            Err(_) => Self::Invalid,
        }
    }

    /// Reachable by sequential (Tab) navigation
    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Value(n) if *n >= 0)
    }

    /// Places the element in or near the tab order. A runtime value
    /// cannot be refuted and counts as declared.
    pub fn is_declared(&self) -> bool {
        matches!(self, Self::Value(_) | Self::Dynamic)
    }
}

// (tag, attribute that must be present)
const FOCUSABLE_ELEMENTS: &[(&str, Option<&str>)] = &[
    ("a", Some("href")),
    ("area", Some("href")),
    ("audio", Some("controls")),
    ("button", None),
    ("embed", None),
    ("iframe", None),
    ("input", None),
    ("select", None),
    ("summary", None),
    ("textarea", None),
    ("video", Some("controls")),
];

/// Focusable without a `tabIndex`: by tag, or through `contentEditable`
pub fn is_natively_focusable(tag: &ElementTag, attributes: &[AttributeItem]) -> bool {
    let Some(name) = tag.native() else {
        return false;
    };

    if name == "input" {
        let hidden = resolve(attributes, "type")
            .as_str()
            .is_some_and(|ty| ty.eq_ignore_ascii_case("hidden"));
        if hidden {
            return false;
        }
    }

    let by_tag = FOCUSABLE_ELEMENTS
        .iter()
        .find(|(focusable, _)| *focusable == name)
        .is_some_and(|(_, required)| required.is_none_or(|attr| resolve(attributes, attr).is_present()));

    by_tag || is_content_editable(attributes)
}

fn is_content_editable(attributes: &[AttributeItem]) -> bool {
    match resolve(attributes, "contentEditable") {
        PropValue::Literal(Value::String(s)) if s.is_empty() => true,
        PropValue::Literal(Value::String(s)) if s.eq_ignore_ascii_case("plaintext-only") => true,
        PropValue::Literal(value) => value.as_bool() == Some(true),
        PropValue::Absent => false,
        PropValue::Dynamic => true,
    }
}

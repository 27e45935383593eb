//! Attribute Accessor
//!
//! Reads one named attribute off an element and reports whether its value
//! is statically known (`Literal`), only known at runtime (`Dynamic`), or
//! not written at all (`Absent`).

use crate::{Attribute, AttributeItem, Value};

/// Tri-state resolution of an attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Literal(Value),
    Dynamic,
    Absent,
}

/// Find a named attribute (ASCII case-insensitive, first match wins).
///
/// Spreads never match: they may or may not carry the attribute, callers
/// decide how to treat them via [`has_spread`].
pub fn get_prop<'a>(attributes: &'a [AttributeItem], name: &str) -> Option<&'a Attribute> {
    attributes.iter().find_map(|item| match item {
        AttributeItem::Attribute(attr) if attr.name.eq_ignore_ascii_case(name) => Some(attr),
        _ => None,
    })
}

/// Resolve a named attribute to its tri-state value
pub fn resolve(attributes: &[AttributeItem], name: &str) -> PropValue {
    match get_prop(attributes, name) {
        Some(attr) => attr.resolve(),
        None => PropValue::Absent,
    }
}

/// Whether the attribute list contains a `{...spread}`
pub fn has_spread(attributes: &[AttributeItem]) -> bool {
    attributes
        .iter()
        .any(|item| matches!(item, AttributeItem::Spread { .. }))
}

impl Attribute {
    /// Resolve this attribute's value
    pub fn resolve(&self) -> PropValue {
        let Some(expr) = &self.value else {
            return PropValue::Literal(Value::Boolean(true));
        };
        match expr.evaluate() {
            Some(value) => PropValue::Literal(value),
            None => PropValue::Dynamic,
        }
    }
}

impl PropValue {
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }

    pub fn literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.literal().and_then(Value::as_str)
    }

    /// Literal number, or literal string holding a number
    pub fn as_number(&self) -> Option<f64> {
        let n = match self.literal()? {
            Value::Number(n) => *n,
            Value::String(s) if !s.trim().is_empty() => s.trim().parse().ok()?,
            _ => return None,
        };
        (!n.is_nan()).then_some(n)
    }

    /// Literal `true` (including the `"true"` string and the shorthand form)
    pub fn is_literal_true(&self) -> bool {
        self.literal().and_then(Value::as_bool) == Some(true)
    }

    /// Present with a value other than `null`/`undefined`, or unknown
    pub fn is_present(&self) -> bool {
        match self {
            Self::Literal(v) => !v.is_nullish(),
            Self::Dynamic => true,
            Self::Absent => false,
        }
    }
}

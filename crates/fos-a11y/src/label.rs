//! Accessible Label Search
//!
//! Depth-bounded search for a text label an assistive technology could
//! announce for an element. A `true` answer means "cannot prove the label
//! is missing": unknown values, spreads and expression children all count
//! as a label so that uncertainty never turns into a report.

use fos_markup::{resolve, Child, ElementNode, PropValue, Value};

/// Hard ceiling on search depth, whatever the caller asks for
pub const MAX_LABEL_DEPTH: u32 = 25;

/// Depth used when none is configured
pub const DEFAULT_LABEL_DEPTH: u32 = 2;

/// Attributes that always name an element
pub const BUILTIN_LABEL_ATTRIBUTES: [&str; 4] = ["alt", "aria-label", "aria-labelledby", "title"];

/// Configured depth, defaulted and clamped to [`MAX_LABEL_DEPTH`]
pub fn clamp_depth(depth: Option<u32>) -> u32 {
    depth.unwrap_or(DEFAULT_LABEL_DEPTH).min(MAX_LABEL_DEPTH)
}

/// Whether `node` or its descendants (up to `depth` levels of elements
/// below it) may expose an accessible label.
///
/// `label_attributes` extends [`BUILTIN_LABEL_ATTRIBUTES`].
pub fn may_have_accessible_label<S: AsRef<str>>(
    node: &ElementNode,
    depth: u32,
    label_attributes: &[S],
) -> bool {
    search(node, depth.min(MAX_LABEL_DEPTH), label_attributes)
}

fn search<S: AsRef<str>>(node: &ElementNode, depth: u32, label_attributes: &[S]) -> bool {
    if has_labelling_attribute(node, label_attributes) {
        return true;
    }

    let has_text = node.children.iter().any(|child| match child {
        Child::Text { value } => !value.trim().is_empty(),
        Child::Expression { .. } => true,
        Child::Element(_) => false,
    });
    if has_text {
        return true;
    }

    if depth == 0 {
        if node.elements().next().is_some() {
            tracing::trace!("Label search depth exhausted at <{}>", node.name);
        }
        return false;
    }

    node.elements()
        .any(|child| search(child, depth - 1, label_attributes))
}

fn has_labelling_attribute<S: AsRef<str>>(node: &ElementNode, label_attributes: &[S]) -> bool {
    // A spread may carry any label attribute
    if node.has_spread() {
        return true;
    }

    BUILTIN_LABEL_ATTRIBUTES
        .iter()
        .copied()
        .chain(label_attributes.iter().map(AsRef::as_ref))
        .any(|name| match resolve(&node.attributes, name) {
            PropValue::Literal(value) => is_label_value(&value),
            PropValue::Dynamic => true,
            PropValue::Absent => false,
        })
}

fn is_label_value(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        other => other.truthy(),
    }
}

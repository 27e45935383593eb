//! Interactive Elements and Roles
//!
//! Whether an element is operable by keyboard/assistive technology, either
//! natively by tag or through an explicit interactive `role`.

use crate::roles::first_known_role;
use fos_markup::{resolve, AttributeItem, ElementTag, PropValue, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Native interactive element and the attributes that qualify it
#[derive(Debug, Clone, Copy)]
struct InteractiveElement {
    /// Attribute that must be present (`href` on links)
    requires: Option<&'static str>,
    /// `type` values that make the element non-interactive
    inert_types: &'static [&'static str],
    /// `tabIndex=-1` removes it from interactivity
    honours_negative_tab_index: bool,
}

const fn native() -> InteractiveElement {
    InteractiveElement { requires: None, inert_types: &[], honours_negative_tab_index: false }
}

const INTERACTIVE_ELEMENTS: &[(&str, InteractiveElement)] = &[
    (
        "a",
        InteractiveElement { requires: Some("href"), inert_types: &[], honours_negative_tab_index: true },
    ),
    (
        "area",
        InteractiveElement { requires: Some("href"), inert_types: &[], honours_negative_tab_index: true },
    ),
    ("button", native()),
    ("datalist", native()),
    (
        "input",
        InteractiveElement { requires: None, inert_types: &["hidden"], honours_negative_tab_index: true },
    ),
    ("menuitem", native()),
    ("option", native()),
    ("select", native()),
    ("textarea", native()),
];

static INTERACTIVE: Lazy<HashMap<&'static str, InteractiveElement>> =
    Lazy::new(|| INTERACTIVE_ELEMENTS.iter().copied().collect());

/// Natively interactive element, given its attributes.
///
/// A dynamic or missing `type` keeps an `input` interactive (the default
/// text type is assumed).
pub fn is_interactive_element(tag: &ElementTag, attributes: &[AttributeItem]) -> bool {
    let Some(element) = tag.native().and_then(|name| INTERACTIVE.get(name)) else {
        return false;
    };

    if let Some(required) = element.requires {
        if !resolve(attributes, required).is_present() {
            return false;
        }
    }

    if let Some(ty) = resolve(attributes, "type").as_str() {
        if element.inert_types.iter().any(|inert| inert.eq_ignore_ascii_case(ty)) {
            return false;
        }
    }

    !(element.honours_negative_tab_index && is_removed_from_tab_order(attributes))
}

/// Literal `tabIndex` of `-1` or `"-1"`
fn is_removed_from_tab_order(attributes: &[AttributeItem]) -> bool {
    match resolve(attributes, "tabIndex") {
        PropValue::Literal(Value::Number(n)) => n == -1.0,
        PropValue::Literal(Value::String(s)) => s.trim() == "-1",
        _ => false,
    }
}

/// Native element carrying a literal interactive `role`.
///
/// A dynamic role is never assumed interactive; components never qualify.
pub fn is_interactive_role(tag: &ElementTag, attributes: &[AttributeItem]) -> bool {
    if tag.is_component() {
        return false;
    }

    match resolve(attributes, "role") {
        PropValue::Literal(Value::String(value)) => {
            first_known_role(&value).is_some_and(|role| role.interactive)
        }
        PropValue::Dynamic => {
            tracing::trace!("Dynamic role on <{}> treated as non-interactive", tag);
            false
        }
        _ => false,
    }
}

/// `aria-hidden` literal true, or a hidden `input`
pub fn is_hidden_from_screen_reader(tag: &ElementTag, attributes: &[AttributeItem]) -> bool {
    if tag.native() == Some("input") {
        let hidden = resolve(attributes, "type")
            .as_str()
            .is_some_and(|ty| ty.eq_ignore_ascii_case("hidden"));
        if hidden {
            return true;
        }
    }
    resolve(attributes, "aria-hidden").is_literal_true()
}

//! DOM Element Semantics
//!
//! Native HTML elements and whether they accept ARIA roles, states and
//! properties. Reserved elements have platform-defined semantics that
//! ARIA must not override.

use fos_markup::ElementTag;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Per-element semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomElement {
    /// Element does not support ARIA attributes
    pub reserved: bool,
}

// (tag, reserved)
const DOM_ELEMENTS: &[(&str, bool)] = &[
    ("a", false),
    ("abbr", false),
    ("acronym", false),
    ("address", false),
    ("applet", false),
    ("area", false),
    ("article", false),
    ("aside", false),
    ("audio", false),
    ("b", false),
    ("base", true),
    ("bdi", false),
    ("bdo", false),
    ("big", false),
    ("blink", false),
    ("blockquote", false),
    ("body", false),
    ("br", false),
    ("button", false),
    ("canvas", false),
    ("caption", false),
    ("center", false),
    ("cite", false),
    ("code", false),
    ("col", true),
    ("colgroup", true),
    ("content", false),
    ("data", false),
    ("datalist", false),
    ("dd", false),
    ("del", false),
    ("details", false),
    ("dfn", false),
    ("dialog", false),
    ("dir", false),
    ("div", false),
    ("dl", false),
    ("dt", false),
    ("em", false),
    ("embed", false),
    ("fieldset", false),
    ("figcaption", false),
    ("figure", false),
    ("font", false),
    ("footer", false),
    ("form", false),
    ("frame", false),
    ("frameset", false),
    ("h1", false),
    ("h2", false),
    ("h3", false),
    ("h4", false),
    ("h5", false),
    ("h6", false),
    ("head", true),
    ("header", false),
    ("hgroup", false),
    ("hr", false),
    ("html", true),
    ("i", false),
    ("iframe", false),
    ("img", false),
    ("input", false),
    ("ins", false),
    ("kbd", false),
    ("keygen", false),
    ("label", false),
    ("legend", false),
    ("li", false),
    ("link", true),
    ("main", false),
    ("map", false),
    ("mark", false),
    ("marquee", false),
    ("menu", false),
    ("menuitem", false),
    ("meta", true),
    ("meter", false),
    ("nav", false),
    ("noembed", true),
    ("noscript", true),
    ("object", false),
    ("ol", false),
    ("optgroup", false),
    ("option", false),
    ("output", false),
    ("p", false),
    ("param", true),
    ("picture", true),
    ("pre", false),
    ("progress", false),
    ("q", false),
    ("rp", false),
    ("rt", false),
    ("rtc", false),
    ("ruby", false),
    ("s", false),
    ("samp", false),
    ("script", true),
    ("section", false),
    ("select", false),
    ("small", false),
    ("source", true),
    ("spacer", false),
    ("span", false),
    ("strike", false),
    ("strong", false),
    ("style", true),
    ("sub", false),
    ("summary", false),
    ("sup", false),
    ("table", false),
    ("tbody", false),
    ("td", false),
    ("textarea", false),
    ("tfoot", false),
    ("th", false),
    ("thead", false),
    ("time", false),
    ("title", true),
    ("tr", false),
    ("track", true),
    ("tt", false),
    ("u", false),
    ("ul", false),
    ("var", false),
    ("video", false),
    ("wbr", false),
    ("xmp", false),
];

static DOM: Lazy<HashMap<&'static str, DomElement>> = Lazy::new(|| {
    DOM_ELEMENTS
        .iter()
        .map(|&(tag, reserved)| (tag, DomElement { reserved }))
        .collect()
});

/// Look up a lower-cased native tag
pub fn dom_element(tag: &str) -> Option<&'static DomElement> {
    DOM.get(tag)
}

/// Whether the tag names a known native element
pub fn is_dom_element(tag: &ElementTag) -> bool {
    tag.native().is_some_and(|name| DOM.contains_key(name))
}

/// Whether the element rejects ARIA attributes; unknown tags do not
pub fn is_reserved(tag: &ElementTag) -> bool {
    tag.native()
        .and_then(dom_element)
        .is_some_and(|element| element.reserved)
}

/// All reserved tag names
pub fn reserved_elements() -> impl Iterator<Item = &'static str> {
    DOM_ELEMENTS
        .iter()
        .filter(|(_, reserved)| *reserved)
        .map(|(tag, _)| *tag)
}

//! fOS Accessibility
//!
//! Static accessibility semantics for component markup.
//!
//! Features:
//! - DOM element, ARIA attribute and ARIA role tables
//! - Interactive element / interactive role resolution
//! - Accessible label search
//! - Keyboard focusability

pub mod aria;
pub mod dom;
pub mod focus;
pub mod interactive;
pub mod label;
pub mod roles;

pub use aria::{
    aria_attribute, aria_attributes, is_aria_attribute, validate_aria_value, AriaAttribute,
    AriaValueType,
};
pub use dom::{dom_element, is_dom_element, is_reserved, DomElement};
pub use focus::{is_natively_focusable, TabIndex};
pub use interactive::{is_hidden_from_screen_reader, is_interactive_element, is_interactive_role};
pub use label::{clamp_depth, may_have_accessible_label, DEFAULT_LABEL_DEPTH, MAX_LABEL_DEPTH};
pub use roles::{first_known_role, role_definition, RoleDefinition};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Unknown ARIA attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid value '{value}' for {name}: expected {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: String,
    },
}

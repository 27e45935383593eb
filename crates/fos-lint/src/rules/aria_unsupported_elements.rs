//! Reserved elements (`meta`, `script`, `html`, ...) must not carry ARIA
//! roles, states or properties.

use super::{Rule, Verdict};
use crate::{Diagnostic, LintError};
use fos_a11y::{is_aria_attribute, is_reserved};
use fos_markup::ElementNode;

const NAME: &str = "aria-unsupported-elements";

fn message(attribute: &str) -> String {
    format!(
        "This element does not support ARIA roles, states and properties. \
         Try removing the prop '{}'.",
        attribute
    )
}

pub struct AriaUnsupportedElements;

impl Rule for AriaUnsupportedElements {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, element: &ElementNode) -> Result<Verdict, LintError> {
        let tag = element.tag()?;
        if !is_reserved(&tag) {
            return Ok(Verdict::NotApplicable);
        }

        let diagnostics = element
            .named_attributes()
            .filter(|attr| attr.name.eq_ignore_ascii_case("role") || is_aria_attribute(&attr.name))
            .map(|attr| Diagnostic::on_attribute(NAME, element, attr, message(&attr.name)))
            .collect();

        Ok(Verdict::from_diagnostics(diagnostics))
    }
}

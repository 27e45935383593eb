//! Literal ARIA state/property values must match the declared type.
//! Runtime values are never reported.

use super::{Rule, Verdict};
use crate::{Diagnostic, LintError};
use fos_a11y::aria_attribute;
use fos_markup::{ElementNode, PropValue};

const NAME: &str = "aria-proptypes";

pub struct AriaPropTypes;

impl Rule for AriaPropTypes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, element: &ElementNode) -> Result<Verdict, LintError> {
        element.tag()?;

        let mut applicable = false;
        let mut diagnostics = Vec::new();
        for attr in element.named_attributes() {
            let Some(definition) = aria_attribute(&attr.name) else {
                continue;
            };
            applicable = true;

            if let PropValue::Literal(value) = attr.resolve() {
                if let Err(err) = definition.validate(&value) {
                    tracing::trace!("{}", err);
                    let message = format!("The value for {} must be {}.", attr.name, definition.describe());
                    diagnostics.push(Diagnostic::on_attribute(NAME, element, attr, message));
                }
            }
        }

        if !applicable {
            return Ok(Verdict::NotApplicable);
        }
        Ok(Verdict::from_diagnostics(diagnostics))
    }
}

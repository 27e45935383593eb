//! Non-interactive elements with a click handler and an interactive role
//! must be reachable by keyboard.

use super::{Rule, Verdict};
use crate::{Diagnostic, LintError};
use fos_a11y::{
    is_hidden_from_screen_reader, is_interactive_element, is_interactive_role,
    is_natively_focusable, TabIndex,
};
use fos_markup::{resolve, ElementNode};

const NAME: &str = "onclick-has-focus";
const MESSAGE: &str = "An non-interactive element with an onClick handler and an \
    interactive role must be focusable. Either set the tabIndex property to \
    a valid value (usually 0) or use an element type which is inherently \
    focusable such as `button`.";

pub struct OnClickHasFocus;

impl Rule for OnClickHasFocus {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, element: &ElementNode) -> Result<Verdict, LintError> {
        let tag = element.tag()?;
        let attributes = &element.attributes;

        if resolve(attributes, "onClick").is_absent() {
            return Ok(Verdict::NotApplicable);
        }
        if is_hidden_from_screen_reader(&tag, attributes) {
            return Ok(Verdict::NotApplicable);
        }
        if is_interactive_element(&tag, attributes) {
            return Ok(Verdict::Pass);
        }
        // Dynamic roles and components land here too
        if !is_interactive_role(&tag, attributes) {
            return Ok(Verdict::NotApplicable);
        }

        // A spread may carry the tabIndex
        let may_declare_tab_index = TabIndex::resolve(attributes).is_declared() || element.has_spread();
        if may_declare_tab_index || is_natively_focusable(&tag, attributes) {
            Ok(Verdict::Pass)
        } else {
            Ok(Verdict::Fail(vec![Diagnostic::on_element(NAME, element, MESSAGE)]))
        }
    }
}

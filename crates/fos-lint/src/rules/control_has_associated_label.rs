//! Controls must be associated with a text label.
//!
//! An element is a control when it is natively interactive, when a native
//! element carries an interactive role, or when its tag is one of the
//! configured control components.

use super::{Rule, Verdict};
use crate::{ControlLabelOptions, Diagnostic, LintError};
use fos_a11y::{is_dom_element, is_interactive_element, is_interactive_role, may_have_accessible_label};
use fos_markup::{resolve, ElementNode};

const NAME: &str = "control-has-associated-label";
const MESSAGE: &str = "A control must be associated with a text label.";

pub struct ControlHasAssociatedLabel {
    options: ControlLabelOptions,
}

impl ControlHasAssociatedLabel {
    pub fn new(options: ControlLabelOptions) -> Self {
        Self { options }
    }
}

impl Rule for ControlHasAssociatedLabel {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, element: &ElementNode) -> Result<Verdict, LintError> {
        let tag = element.tag()?;
        let attributes = &element.attributes;

        // Labels such as <label><input />Save</label> are invisible here
        if self.options.ignore_elements.iter().any(|ignored| ignored == tag.name()) {
            return Ok(Verdict::NotApplicable);
        }
        if let Some(role) = resolve(attributes, "role").as_str() {
            if self.options.ignore_roles.iter().any(|ignored| ignored == role) {
                return Ok(Verdict::NotApplicable);
            }
        }

        let is_control = is_interactive_element(&tag, attributes)
            || (is_dom_element(&tag) && is_interactive_role(&tag, attributes))
            || self.options.control_components.iter().any(|c| c == tag.name());
        if !is_control {
            return Ok(Verdict::NotApplicable);
        }

        let depth = self.options.depth();
        if may_have_accessible_label(element, depth, &self.options.label_attributes) {
            Ok(Verdict::Pass)
        } else {
            tracing::debug!("<{}> has no label within depth {}", tag, depth);
            Ok(Verdict::Fail(vec![Diagnostic::on_element(NAME, element, MESSAGE)]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_markup::Expr;

    fn check(element: ElementNode) -> Verdict {
        ControlHasAssociatedLabel::new(ControlLabelOptions::default())
            .check(&element)
            .unwrap()
    }

    fn check_with(options: ControlLabelOptions, element: ElementNode) -> Verdict {
        ControlHasAssociatedLabel::new(options).check(&element).unwrap()
    }

    #[test]
    fn test_labelled_controls_pass() {
        assert_eq!(check(ElementNode::new("button").text("Save")), Verdict::Pass);
        assert_eq!(check(ElementNode::new("button").str_attr("aria-label", "Save")), Verdict::Pass);
        assert_eq!(
            check(ElementNode::new("button").attr("aria-label", Expr::ident("dynamicLabel"))),
            Verdict::Pass
        );
        assert_eq!(check(ElementNode::new("button").spread(Expr::ident("props"))), Verdict::Pass);
        assert_eq!(check(ElementNode::new("button").str_attr("aria-label", "false")), Verdict::Pass);
        assert_eq!(
            check(ElementNode::new("div").str_attr("role", "button").text("Save")),
            Verdict::Pass
        );
    }

    #[test]
    fn test_unlabelled_controls_fail() {
        let verdict = check(ElementNode::new("button"));
        let diagnostics = verdict.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, MESSAGE);

        assert!(check(ElementNode::new("div").str_attr("role", "button").attr("onClick", Expr::Function)).is_fail());
        assert!(check(ElementNode::new("input").str_attr("type", "text")).is_fail());
        assert!(check(ElementNode::new("a").str_attr("href", "#")).is_fail());
    }

    #[test]
    fn test_non_controls_not_applicable() {
        assert_eq!(check(ElementNode::new("div")), Verdict::NotApplicable);
        assert_eq!(check(ElementNode::new("input").str_attr("type", "hidden")), Verdict::NotApplicable);
        assert_eq!(check(ElementNode::new("a")), Verdict::NotApplicable);
        assert_eq!(check(ElementNode::new("CustomControl")), Verdict::NotApplicable);
        assert_eq!(check(ElementNode::new("div").attr("role", Expr::ident("r"))), Verdict::NotApplicable);
    }

    #[test]
    fn test_control_components() {
        let options = ControlLabelOptions {
            control_components: vec!["CustomControl".into()],
            ..Default::default()
        };
        assert!(check_with(options.clone(), ElementNode::new("CustomControl")).is_fail());
        assert_eq!(
            check_with(options, ElementNode::new("CustomControl").text("Save")),
            Verdict::Pass
        );
    }

    #[test]
    fn test_ignore_options() {
        let options = ControlLabelOptions {
            ignore_elements: vec!["input".into()],
            ignore_roles: vec!["checkbox".into()],
            ..Default::default()
        };
        assert_eq!(check_with(options.clone(), ElementNode::new("input")), Verdict::NotApplicable);
        assert_eq!(
            check_with(options.clone(), ElementNode::new("div").str_attr("role", "checkbox")),
            Verdict::NotApplicable
        );
        assert!(check_with(options, ElementNode::new("button")).is_fail());
    }

    #[test]
    fn test_label_attributes_option() {
        let options = ControlLabelOptions {
            label_attributes: vec!["label".into()],
            ..Default::default()
        };
        let element = ElementNode::new("button").str_attr("label", "Save");
        assert!(check(element.clone()).is_fail());
        assert_eq!(check_with(options, element), Verdict::Pass);
    }

    #[test]
    fn test_depth_option() {
        let element = ElementNode::new("button").child(
            ElementNode::new("span").child(ElementNode::new("span").child(ElementNode::new("span").text("Save"))),
        );
        assert!(check(element.clone()).is_fail());

        let options = ControlLabelOptions { depth: Some(3), ..Default::default() };
        assert_eq!(check_with(options, element.clone()), Verdict::Pass);

        let options = ControlLabelOptions { depth: Some(0), ..Default::default() };
        assert!(check_with(options, ElementNode::new("button").child(ElementNode::new("span").text("Save"))).is_fail());
    }
}

//! Lint Rules
//!
//! Thin evaluators that ask the accessibility resolvers about one visited
//! element and turn the answer into diagnostics.

mod aria_proptypes;
mod aria_unsupported_elements;
mod control_has_associated_label;
mod onclick_has_focus;

pub use aria_proptypes::AriaPropTypes;
pub use aria_unsupported_elements::AriaUnsupportedElements;
pub use control_has_associated_label::ControlHasAssociatedLabel;
pub use onclick_has_focus::OnClickHasFocus;

use crate::{Diagnostic, LintConfig, LintError};
use fos_markup::ElementNode;

/// Outcome of one rule on one element
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The rule does not apply to this element
    NotApplicable,
    Pass,
    /// Non-empty list of findings
    Fail(Vec<Diagnostic>),
}

impl Verdict {
    /// `Pass` when there is nothing to report
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        if diagnostics.is_empty() {
            Self::Pass
        } else {
            Self::Fail(diagnostics)
        }
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        match self {
            Self::Fail(diagnostics) => diagnostics,
            Self::NotApplicable | Self::Pass => Vec::new(),
        }
    }
}

/// Accessibility rule
pub trait Rule: Send + Sync {
    /// Rule identifier as used in configuration
    fn name(&self) -> &'static str;

    /// Check one element. Errors are contract violations of the input
    /// tree and only abort this element.
    fn check(&self, element: &ElementNode) -> Result<Verdict, LintError>;
}

/// Instantiate every enabled rule
pub fn from_config(config: &LintConfig) -> Vec<Box<dyn Rule>> {
    let mut rules: Vec<Box<dyn Rule>> = Vec::new();

    if config.aria_unsupported_elements.enabled {
        rules.push(Box::new(AriaUnsupportedElements));
    }
    if config.control_has_associated_label.enabled {
        rules.push(Box::new(ControlHasAssociatedLabel::new(
            config.control_has_associated_label.options.clone(),
        )));
    }
    if config.onclick_has_focus.enabled {
        rules.push(Box::new(OnClickHasFocus));
    }
    if config.aria_proptypes.enabled {
        rules.push(Box::new(AriaPropTypes));
    }

    rules
}

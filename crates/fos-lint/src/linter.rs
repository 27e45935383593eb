//! Linter
//!
//! Walks element trees in pre-order and runs every enabled rule on each
//! element. Rules are independent of each other and of visit order; an
//! erroring rule aborts only its own check of that element.

use crate::rules::{self, Rule, Verdict};
use crate::{Diagnostic, LintConfig};
use fos_markup::{ElementNode, MarkupDocument, Span};
use rayon::prelude::*;
use serde::Serialize;

/// Rule that could not check an element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintFailure {
    pub rule: &'static str,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    pub error: String,
}

/// Result of linting one tree or document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LintReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<LintFailure>,
    pub elements_checked: usize,
}

impl LintReport {
    /// No diagnostics and no failures
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.failures.is_empty()
    }
}

/// Rule runner
pub struct Linter {
    rules: Vec<Box<dyn Rule>>,
}

impl Linter {
    /// Linter running every rule enabled in `config`
    pub fn new(config: &LintConfig) -> Self {
        let linter = Self::with_rules(rules::from_config(config));
        tracing::debug!("Linter initialized with rules: {:?}", linter.rule_names());
        linter
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule on a single element (descendants are not visited)
    pub fn check_element(&self, element: &ElementNode, report: &mut LintReport) {
        report.elements_checked += 1;

        for rule in &self.rules {
            match rule.check(element) {
                Ok(Verdict::Fail(diagnostics)) => report.diagnostics.extend(diagnostics),
                Ok(Verdict::Pass | Verdict::NotApplicable) => {}
                Err(err) => {
                    tracing::warn!("Rule {} failed on <{}>: {}", rule.name(), element.name, err);
                    report.failures.push(LintFailure {
                        rule: rule.name(),
                        tag: element.name.clone(),
                        span: element.span,
                        error: err.to_string(),
                    });
                }
            }
        }
    }

    /// Lint `root` and every descendant element
    pub fn lint_tree(&self, root: &ElementNode) -> LintReport {
        let mut report = LintReport::default();
        for element in root.walk() {
            self.check_element(element, &mut report);
        }
        report
    }

    /// Lint every root of a document; diagnostics carry its source
    pub fn lint_document(&self, document: &MarkupDocument) -> LintReport {
        let mut report = LintReport {
            source: document.source.clone(),
            ..Default::default()
        };
        for root in &document.elements {
            for element in root.walk() {
                self.check_element(element, &mut report);
            }
        }

        if let Some(source) = &document.source {
            for diagnostic in &mut report.diagnostics {
                diagnostic.source = Some(source.clone());
            }
        }

        tracing::debug!(
            "Linted {:?}: {} elements, {} diagnostics",
            document.source,
            report.elements_checked,
            report.diagnostics.len()
        );
        report
    }

    /// Lint documents in parallel; reports keep input order
    pub fn lint_documents(&self, documents: &[MarkupDocument]) -> Vec<LintReport> {
        documents
            .par_iter()
            .map(|document| self.lint_document(document))
            .collect()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(&LintConfig::default())
    }
}

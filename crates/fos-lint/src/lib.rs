//! fOS Lint
//!
//! Accessibility rules over component markup trees. A host parser hands
//! over element trees; each visited element is checked by every enabled
//! rule and turned into zero or more diagnostics.

pub mod config;
pub mod diagnostic;
pub mod linter;
pub mod rules;

pub use config::{ControlLabelOptions, LintConfig, NoOptions, RuleConfig};
pub use diagnostic::{Diagnostic, Target};
pub use linter::{LintFailure, LintReport, Linter};
pub use rules::{Rule, Verdict};

use fos_markup::{MarkupDocument, MarkupError};
use std::path::{Path, PathBuf};

/// Lint error
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("Invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn read_file(path: &Path) -> Result<String, LintError> {
    std::fs::read_to_string(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON markup document; its source defaults to the file path
pub fn load_document(path: &Path) -> Result<MarkupDocument, LintError> {
    let mut document = MarkupDocument::from_json(&read_file(path)?)?;
    if document.source.is_none() {
        document.source = Some(path.display().to_string());
    }
    Ok(document)
}

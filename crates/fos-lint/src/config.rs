//! Lint Configuration
//!
//! JSON configuration, one entry per rule. Unknown keys are rejected so
//! that a misspelled option fails loudly instead of being ignored.

use crate::LintError;
use fos_a11y::clamp_depth;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rule set configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LintConfig {
    pub aria_unsupported_elements: RuleConfig<NoOptions>,
    pub control_has_associated_label: RuleConfig<ControlLabelOptions>,
    pub onclick_has_focus: RuleConfig<NoOptions>,
    pub aria_proptypes: RuleConfig<NoOptions>,
}

/// Per-rule switch plus options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    deny_unknown_fields,
    bound(deserialize = "T: Deserialize<'de> + Default")
)]
pub struct RuleConfig<T> {
    pub enabled: bool,
    pub options: T,
}

impl<T: Default> Default for RuleConfig<T> {
    fn default() -> Self {
        Self {
            enabled: true,
            options: T::default(),
        }
    }
}

/// Options of a rule that takes none
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoOptions {}

/// Options of `control-has-associated-label`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ControlLabelOptions {
    /// Extra attributes that carry a label
    pub label_attributes: Vec<String>,
    /// Component tags to treat as controls
    pub control_components: Vec<String>,
    pub ignore_elements: Vec<String>,
    pub ignore_roles: Vec<String>,
    /// Element depth searched for a label
    pub depth: Option<u32>,
}

impl ControlLabelOptions {
    /// Effective search depth (default 2, at most 25)
    pub fn depth(&self) -> u32 {
        clamp_depth(self.depth)
    }
}

impl LintConfig {
    pub fn from_json(json: &str) -> Result<Self, LintError> {
        serde_json::from_str(json).map_err(LintError::Config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, LintError> {
        let config = Self::from_json(&crate::read_file(path)?)?;
        tracing::debug!("Loaded lint configuration from {}", path.display());
        Ok(config)
    }
}

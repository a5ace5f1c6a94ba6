//! Configuration types and defaults for taskparams.

use crate::replacements::{INPUTS_SCOPE, OUTPUTS_SCOPE};
use serde::{Deserialize, Serialize};

/// Serialization format for rendered specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// YAML (default).
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub(super) fn default_input_scope() -> String {
    INPUTS_SCOPE.to_string()
}

pub(super) fn default_output_scope() -> String {
    OUTPUTS_SCOPE.to_string()
}

//! Config struct definition and default implementation.

use super::types::*;
use crate::render::ResourceScopes;
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".taskparams.yaml";

/// Configuration for taskparams.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Format used when printing rendered specs.
    pub output_format: OutputFormat,

    /// Fail instead of warning when placeholders remain after rendering.
    pub strict: bool,

    /// Scope name for input resource placeholders (default: "inputs").
    pub input_scope: String,

    /// Scope name for output resource placeholders (default: "outputs").
    pub output_scope: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            strict: false,
            input_scope: default_input_scope(),
            output_scope: default_output_scope(),
        }
    }
}

impl Config {
    /// Resource scopes configured for rendering.
    pub fn scopes(&self) -> ResourceScopes {
        ResourceScopes {
            inputs: self.input_scope.clone(),
            outputs: self.output_scope.clone(),
        }
    }
}

//! Config loading, validation, and utility operations.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, TaskParamsError};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TaskParamsError::UserError)` - The file could not be read
    /// * `Err(TaskParamsError::ParseError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TaskParamsError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loading config");
        Self::from_yaml(&content)
    }

    /// Load `path` if given, otherwise `.taskparams.yaml` in `dir` if it
    /// exists, otherwise the defaults.
    pub fn resolve(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let discovered = dir.join(CONFIG_FILE_NAME);
        if discovered.is_file() {
            return Self::load(discovered);
        }

        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| TaskParamsError::ParseError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TaskParamsError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `input_scope` and `output_scope` must be non-empty placeholder key segments
    ///   (no `.`), and must differ
    pub fn validate(&self) -> Result<()> {
        for (field, scope) in [
            ("input_scope", &self.input_scope),
            ("output_scope", &self.output_scope),
        ] {
            if scope.is_empty() {
                return Err(TaskParamsError::ParseError(format!(
                    "config validation failed: {} must be non-empty",
                    field
                )));
            }
            if scope.contains('.') || !crate::placeholder::is_valid_key(scope) {
                return Err(TaskParamsError::ParseError(format!(
                    "config validation failed: {} '{}' is not a valid key segment",
                    field, scope
                )));
            }
        }

        if self.input_scope == self.output_scope {
            return Err(TaskParamsError::ParseError(format!(
                "config validation failed: input_scope and output_scope are both '{}'",
                self.input_scope
            )));
        }

        Ok(())
    }
}

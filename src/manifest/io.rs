//! Loading task definitions and runs from disk.

use super::{TaskDefinition, TaskRun};
use crate::error::{Result, TaskParamsError};
use std::path::Path;
use tracing::debug;

fn read(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        TaskParamsError::UserError(format!(
            "failed to read {} file '{}': {}",
            what,
            path.display(),
            e
        ))
    })
}

impl TaskDefinition {
    /// Load a task definition from a YAML (or JSON) file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let task = Self::from_yaml(&read(path, "task")?)?;
        debug!(
            path = %path.display(),
            steps = task.spec.steps.len(),
            params = task.params.len(),
            "loaded task definition"
        );
        Ok(task)
    }

    /// Parse a task definition from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| TaskParamsError::ParseError(format!("invalid task definition: {}", e)))
    }
}

impl TaskRun {
    /// Load a task run from a YAML (or JSON) file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let run = Self::from_yaml(&read(path, "run")?)?;
        debug!(
            path = %path.display(),
            params = run.params.len(),
            inputs = run.resources.inputs.len(),
            outputs = run.resources.outputs.len(),
            "loaded task run"
        );
        Ok(run)
    }

    /// Parse a task run from a YAML string.
    ///
    /// Resources without a `name` take their binding name.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document is a run with no params and no resources.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut run: TaskRun = serde_yaml::from_str(yaml)
            .map_err(|e| TaskParamsError::ParseError(format!("invalid task run: {}", e)))?;
        run.resources.default_names();
        Ok(run)
    }
}

//! Task definition and task run documents.
//!
//! A task definition declares parameters and the spec they are substituted
//! into; a task run supplies parameter values and the resolved resources
//! bound for input and output.
//!
//! # Task definition
//!
//! ```text
//! name: build-image
//! params:
//!   - name: dockerfile
//!     default: Dockerfile
//! spec:
//!   steps:
//!     - name: build
//!       image: gcr.io/kaniko-project/executor
//!       args: ["--dockerfile=${inputs.params.dockerfile}"]
//! ```
//!
//! # Task run
//!
//! ```text
//! params:
//!   - name: dockerfile
//!     value: Dockerfile.release
//! resources:
//!   inputs:
//!     source:
//!       type: git
//!       url: https://github.com/org/app
//!       revision: v1.2.0
//!   outputs:
//!     image:
//!       type: image
//!       url: gcr.io/org/app
//! ```
//!
//! Unknown fields are ignored in both documents.

use crate::resources::PipelineResource;
use crate::spec::{ParamBinding, ParamDeclaration, TaskSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod io;
#[cfg(test)]
mod tests;

/// A task: its declared parameters and its spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinition {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamDeclaration>,

    #[serde(default)]
    pub spec: TaskSpec,
}

/// One invocation of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRun {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamBinding>,

    #[serde(default)]
    pub resources: RunResources,
}

/// Resolved resources of a run, keyed by binding name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResources {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub inputs: BTreeMap<String, PipelineResource>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, PipelineResource>,
}

impl RunResources {
    /// Name every unnamed resource after its binding.
    fn default_names(&mut self) {
        for (binding, resource) in self.inputs.iter_mut().chain(self.outputs.iter_mut()) {
            resource.default_name(binding);
        }
    }
}

//! Rendering a task run.
//!
//! Rendering applies three independent single-pass rewrites in order:
//!
//! 1. parameters (`inputs.params.*`)
//! 2. input resources (`<input scope>.resources.*`)
//! 3. output resources (`<output scope>.resources.*`)
//!
//! A value inserted by one pass may be substituted by a later pass if it
//! contains a placeholder for that later pass. Within a pass nothing is
//! expanded twice.

use crate::manifest::{TaskDefinition, TaskRun};
use crate::replacements::{INPUTS_SCOPE, OUTPUTS_SCOPE, Replacements};
use crate::rewrite::{apply_replacements, placeholder_references};
use crate::spec::TaskSpec;
use tracing::{debug, warn};

/// Scope names used for resource placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceScopes {
    pub inputs: String,
    pub outputs: String,
}

impl Default for ResourceScopes {
    fn default() -> Self {
        Self {
            inputs: INPUTS_SCOPE.to_string(),
            outputs: OUTPUTS_SCOPE.to_string(),
        }
    }
}

/// The outcome of rendering a task run.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The substituted spec.
    pub spec: TaskSpec,
    /// Every replacement that was available, across all passes.
    pub replacements: Replacements,
    /// Keys of placeholders still present in `spec`, sorted.
    pub unresolved: Vec<String>,
}

/// Replacement maps for each pass, in application order.
pub fn replacement_passes(
    task: &TaskDefinition,
    run: &TaskRun,
    scopes: &ResourceScopes,
) -> [Replacements; 3] {
    [
        Replacements::from_parameters(&task.params, &run.params),
        Replacements::from_resources(&run.resources.inputs, &scopes.inputs),
        Replacements::from_resources(&run.resources.outputs, &scopes.outputs),
    ]
}

/// Render `task` for `run`.
pub fn render(task: &TaskDefinition, run: &TaskRun, scopes: &ResourceScopes) -> Rendered {
    let mut spec = task.spec.clone();
    let mut all = Replacements::new();

    for pass in replacement_passes(task, run, scopes) {
        if pass.is_empty() {
            continue;
        }
        spec = apply_replacements(&spec, &pass);
        all.merge(pass);
    }

    let unresolved: Vec<String> = placeholder_references(&spec).into_iter().collect();
    if unresolved.is_empty() {
        debug!(task = %task.name, replacements = all.len(), "rendered task");
    } else {
        warn!(
            task = %task.name,
            count = unresolved.len(),
            "placeholders left unresolved: {}",
            unresolved.join(", ")
        );
    }

    Rendered {
        spec,
        replacements: all,
        unresolved,
    }
}

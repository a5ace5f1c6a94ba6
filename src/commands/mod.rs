//! Command implementations for taskparams.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input loading shared by them.

mod apply;
mod params;
mod refs;


use crate::cli::{Command, RunInputs};
use crate::config::Config;
use crate::error::{Result, TaskParamsError};
use crate::manifest::{TaskDefinition, TaskRun};
use crate::spec::ParamBinding;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Apply(args) => apply::cmd_apply(args, config),
        Command::Params(args) => params::cmd_params(args, config),
        Command::Refs(args) => refs::cmd_refs(args),
    }
}

/// Load the task and run named by `inputs`.
///
/// `--param` values are appended to the run's params, so they win over
/// values from the run file.
fn load_inputs(inputs: &RunInputs) -> Result<(TaskDefinition, TaskRun)> {
    let task = TaskDefinition::load(&inputs.task)?;
    let mut run = match &inputs.run {
        Some(path) => TaskRun::load(path)?,
        None => TaskRun::default(),
    };

    for param in &inputs.params {
        let binding = parse_param(param)?;
        debug!(param = %binding.name, "param set on command line");
        run.params.push(binding);
    }

    Ok((task, run))
}

/// Parse a `NAME=VALUE` command-line parameter. The value may contain `=`.
fn parse_param(raw: &str) -> Result<ParamBinding> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok(ParamBinding::new(name, value)),
        _ => Err(TaskParamsError::UserError(format!(
            "invalid --param '{}': expected NAME=VALUE",
            raw
        ))),
    }
}

//! Implementation of the `taskparams apply` command.
//!
//! Renders a task for a run and prints (or writes) the substituted spec.

use super::load_inputs;
use crate::cli::ApplyArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{Result, TaskParamsError};
use crate::render::{Rendered, render};
use crate::spec::TaskSpec;
use tracing::info;

/// Execute the `taskparams apply` command.
pub fn cmd_apply(args: ApplyArgs, config: &Config) -> Result<()> {
    let format = match &args.format {
        Some(raw) => OutputFormat::from_str(raw).ok_or_else(|| {
            TaskParamsError::UserError(format!(
                "unknown output format '{}': expected yaml or json",
                raw
            ))
        })?,
        None => config.output_format,
    };

    let (task, run) = load_inputs(&args.inputs)?;
    let rendered = render(&task, &run, &config.scopes());
    check_unresolved(&rendered, config)?;

    let output = serialize_spec(&rendered.spec, format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &output).map_err(|e| {
                TaskParamsError::UserError(format!(
                    "failed to write '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            info!(path = %path.display(), "wrote rendered spec");
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// In strict mode, any placeholder left in the output is an error.
pub(super) fn check_unresolved(rendered: &Rendered, config: &Config) -> Result<()> {
    if config.strict && !rendered.unresolved.is_empty() {
        return Err(TaskParamsError::UnresolvedPlaceholders(
            rendered.unresolved.clone(),
        ));
    }
    Ok(())
}

/// Serialize a spec in `format`, newline-terminated.
pub(super) fn serialize_spec(spec: &TaskSpec, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(spec).map_err(|e| {
            TaskParamsError::UserError(format!("failed to serialize spec to YAML: {}", e))
        }),
        OutputFormat::Json => serde_json::to_string_pretty(spec)
            .map(|json| json + "\n")
            .map_err(|e| {
                TaskParamsError::UserError(format!("failed to serialize spec to JSON: {}", e))
            }),
    }
}

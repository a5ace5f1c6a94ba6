//! Implementation of the `taskparams params` command.

use super::load_inputs;
use crate::cli::ParamsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::render::replacement_passes;
use crate::replacements::Replacements;

/// Execute the `taskparams params` command.
pub fn cmd_params(args: ParamsArgs, config: &Config) -> Result<()> {
    let (task, run) = load_inputs(&args.inputs)?;

    let mut all = Replacements::new();
    for pass in replacement_passes(&task, &run, &config.scopes()) {
        all.merge(pass);
    }

    print!("{}", format_replacements(&all));
    Ok(())
}

/// One `key=value` line per entry, in key order.
pub(super) fn format_replacements(replacements: &Replacements) -> String {
    replacements
        .iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}

//! Implementation of the `taskparams refs` command.

use crate::cli::RefsArgs;
use crate::error::Result;
use crate::manifest::TaskDefinition;
use crate::rewrite::placeholder_references;

/// Execute the `taskparams refs` command.
///
/// Prints each distinct placeholder key used by the task spec, sorted.
pub fn cmd_refs(args: RefsArgs) -> Result<()> {
    let task = TaskDefinition::load(&args.task)?;
    for key in placeholder_references(&task.spec) {
        println!("{}", key);
    }
    Ok(())
}

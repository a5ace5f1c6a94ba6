//! CLI argument parsing for taskparams.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Taskparams: substitute parameters and resources into task specs.
///
/// Placeholders are written `${key}`:
/// - `${inputs.params.<name>}` for task parameters
/// - `${inputs.resources.<binding>.<field>}` for input resources
/// - `${outputs.resources.<binding>.<field>}` for output resources
#[derive(Parser, Debug)]
#[command(name = "taskparams")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./.taskparams.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for taskparams.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a task for a run and print the substituted spec.
    ///
    /// Applies parameters, then input resources, then output resources.
    Apply(ApplyArgs),

    /// Print the replacement map computed for a run.
    ///
    /// One `key=value` line per entry, sorted by key.
    Params(ParamsArgs),

    /// List every placeholder key referenced by a task spec.
    Refs(RefsArgs),
}

/// Inputs shared by commands that render a run.
#[derive(Args, Debug, Clone)]
pub struct RunInputs {
    /// Task definition file (YAML or JSON).
    #[arg(short, long)]
    pub task: PathBuf,

    /// Task run file with params and resources (YAML or JSON).
    #[arg(short, long)]
    pub run: Option<PathBuf>,

    /// Parameter value as NAME=VALUE, applied after the run file.
    #[arg(short, long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,
}

/// Arguments for the `apply` command.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub inputs: RunInputs,

    /// Output format: yaml or json (overrides config).
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the rendered spec to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `params` command.
#[derive(Args, Debug)]
pub struct ParamsArgs {
    #[command(flatten)]
    pub inputs: RunInputs,
}

/// Arguments for the `refs` command.
#[derive(Args, Debug)]
pub struct RefsArgs {
    /// Task definition file (YAML or JSON).
    #[arg(short, long)]
    pub task: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

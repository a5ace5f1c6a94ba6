//! Taskparams: parameter and resource substitution for task specifications.
//!
//! Given a [`spec::TaskSpec`] whose fields contain `${...}` placeholders, this
//! crate builds [`replacements::Replacements`] from declared parameter
//! defaults, run-time parameter values, and resolved resources, and produces a
//! substituted copy of the spec. The input spec is never modified.
//!
//! ```
//! use taskparams::replacements::Replacements;
//! use taskparams::rewrite::apply_replacements;
//! use taskparams::spec::{ParamBinding, ParamDeclaration, Step, TaskSpec};
//!
//! let spec = TaskSpec {
//!     steps: vec![Step {
//!         name: "greet".to_string(),
//!         image: "${inputs.params.greeting}".to_string(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let map = Replacements::from_parameters(
//!     &[ParamDeclaration::with_default("greeting", "hi")],
//!     &[ParamBinding::new("greeting", "hello")],
//! );
//! let rendered = apply_replacements(&spec, &map);
//!
//! assert_eq!(rendered.steps[0].image, "hello");
//! assert_eq!(spec.steps[0].image, "${inputs.params.greeting}");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod manifest;
pub mod placeholder;
pub mod render;
pub mod replacements;
pub mod resources;
pub mod rewrite;
pub mod spec;

#[cfg(test)]
mod test_support;
